//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guards are applied in `app`, not inside the pages.

pub mod blogs;
pub mod dashboard;
pub mod login;
pub mod not_authorized;
pub mod pending_blogs;
pub mod profile;
pub mod signup;
