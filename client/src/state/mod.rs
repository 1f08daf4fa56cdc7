//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `blogs`, `notices`) on top of the
//! framework-free [`store::Store`] container, so stores run the same under
//! tests, SSR and hydration. Components bridge them into signals in `app`.

pub mod auth;
pub mod blogs;
pub mod notices;
pub mod store;
