//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, guards, notices) while
//! reading shared state from Leptos context providers.

pub mod blog_card;
pub mod guard;
pub mod loader;
pub mod nav_bar;
pub mod notice_tray;
