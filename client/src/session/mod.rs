//! Bearer-token session plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `token` decodes payload claims, `storage` keeps the token in exactly one
//! browser storage area, and `controller` ties both to the expiry timer. The
//! auth store is the only caller.

pub mod controller;
pub mod storage;
pub mod token;
