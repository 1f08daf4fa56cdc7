use super::*;
use crate::net::types::{User, UserRole};

fn user(role: &str) -> User {
    User {
        id: "u1".to_owned(),
        email: "u1@example.com".to_owned(),
        username: "ada".to_owned(),
        role: UserRole::from(role),
        is_verified: true,
        avatar: None,
        profile_picture: None,
        created_at: None,
        updated_at: None,
    }
}

fn signed_in(role: &str) -> AuthState {
    AuthState { user: Some(user(role)), authenticated: true, loading: false, update_loading: false }
}

fn signed_out() -> AuthState {
    AuthState { loading: false, ..AuthState::default() }
}

// =============================================================
// auth_guard_decision
// =============================================================

#[test]
fn waits_while_loading_regardless_of_other_fields() {
    let mut state = signed_in("user");
    state.loading = true;
    assert_eq!(auth_guard_decision(&state, "/dashboard", &["admin"]), GuardDecision::Wait);
    assert_eq!(auth_guard_decision(&AuthState::default(), "/dashboard", &[]), GuardDecision::Wait);
}

#[test]
fn unauthenticated_redirects_to_login() {
    assert_eq!(auth_guard_decision(&signed_out(), "/profile", &[]), GuardDecision::Redirect(LOGIN_PATH));
}

#[test]
fn unauthenticated_on_auth_pages_renders_blank() {
    assert_eq!(auth_guard_decision(&signed_out(), "/login", &[]), GuardDecision::Blank);
    assert_eq!(auth_guard_decision(&signed_out(), "/signup", &[]), GuardDecision::Blank);
}

#[test]
fn authenticated_without_user_waits() {
    let state = AuthState { authenticated: true, loading: false, ..AuthState::default() };
    assert_eq!(auth_guard_decision(&state, "/dashboard", &[]), GuardDecision::Wait);
}

#[test]
fn admin_only_route_renders_for_admin_and_redirects_user() {
    assert_eq!(auth_guard_decision(&signed_in("admin"), "/admin", &["admin"]), GuardDecision::Render);
    assert_eq!(
        auth_guard_decision(&signed_in("user"), "/admin", &["admin"]),
        GuardDecision::Redirect(NOT_AUTHORIZED_PATH)
    );
}

#[test]
fn role_list_is_matched_exactly() {
    let roles = ["admin", "super-admin"];
    assert_eq!(auth_guard_decision(&signed_in("super-admin"), "/x", &roles), GuardDecision::Render);
    assert_eq!(
        auth_guard_decision(&signed_in("editor"), "/x", &roles),
        GuardDecision::Redirect(NOT_AUTHORIZED_PATH)
    );
}

#[test]
fn empty_role_list_admits_any_user() {
    assert_eq!(auth_guard_decision(&signed_in("user"), "/profile", &[]), GuardDecision::Render);
}

// =============================================================
// guest_guard_decision
// =============================================================

#[test]
fn guest_guard_waits_redirects_or_renders() {
    assert_eq!(guest_guard_decision(&AuthState::default()), GuardDecision::Wait);
    assert_eq!(guest_guard_decision(&signed_in("user")), GuardDecision::Redirect(DASHBOARD_PATH));
    assert_eq!(guest_guard_decision(&signed_out()), GuardDecision::Render);
}
