//! Route guards for protected and guest-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both guards read the shared `RwSignal<AuthState>`, derive a
//! [`GuardDecision`] and redirect through the router with history replace, so
//! the back button never lands on a page the user was bounced from.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loader::Loader;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, auth_guard_decision, guest_guard_decision};

/// Render `children` only for an authenticated user whose role is in
/// `allowed_roles` (any role when empty).
#[component]
pub fn AuthGuard(#[prop(optional)] allowed_roles: Vec<&'static str>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let decision = Memo::new(move |_| {
        let pathname = location.pathname.get();
        auth.with(|state| auth_guard_decision(state, &pathname, &allowed_roles))
    });
    guarded(decision, children)
}

/// Render `children` only while nobody is signed in.
#[component]
pub fn GuestGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| auth.with(guest_guard_decision));
    guarded(decision, children)
}

fn guarded(decision: Memo<GuardDecision>, children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Wait => view! { <Loader/> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(_) | GuardDecision::Blank => ().into_any(),
    }
}
