//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod blog;
pub mod host;
#[cfg(feature = "hydrate")]
pub mod host_browser;
pub mod validation;
