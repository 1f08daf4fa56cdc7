//! Networking modules for the blog backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `api` layers the base URL, default headers
//! and the shared response interceptor on top, and `types` defines the wire
//! schema.

pub mod api;
pub mod transport;
pub mod types;
