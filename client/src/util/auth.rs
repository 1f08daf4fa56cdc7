//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes must agree on when to wait, redirect or render. The
//! decisions are plain functions of [`AuthState`] so `AuthGuard` and
//! `GuestGuard` stay thin and the rules are testable without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const NOT_AUTHORIZED_PATH: &str = "/not-authorized";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is still resolving; show a loader.
    Wait,
    /// Navigate away (with history replace) and render nothing.
    Redirect(&'static str),
    /// Render nothing and stay put.
    Blank,
    Render,
}

/// Decide what a protected route shows. An empty `allowed_roles` admits any
/// authenticated user.
pub fn auth_guard_decision(state: &AuthState, pathname: &str, allowed_roles: &[&str]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if !state.authenticated {
        if pathname == LOGIN_PATH || pathname == SIGNUP_PATH {
            return GuardDecision::Blank;
        }
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    let Some(role) = state.role() else {
        return GuardDecision::Wait;
    };
    if !allowed_roles.is_empty() && !allowed_roles.contains(&role) {
        return GuardDecision::Redirect(NOT_AUTHORIZED_PATH);
    }
    GuardDecision::Render
}

/// Decide what a guest-only route (login, signup) shows.
pub fn guest_guard_decision(state: &AuthState) -> GuardDecision {
    if state.loading {
        GuardDecision::Wait
    } else if state.authenticated {
        GuardDecision::Redirect(DASHBOARD_PATH)
    } else {
        GuardDecision::Render
    }
}
