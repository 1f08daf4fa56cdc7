//! Top navigation with account links and logout.
//!
//! Logout only clears local state; any guarded page the user is on redirects
//! itself to `/login` once the auth signal flips.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::Services;
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<Services>();

    let is_admin = move || auth.with(|state| state.user.as_ref().is_some_and(|user| user.role.is_admin()));
    let username = move || auth.with(|state| state.user.as_ref().map(|user| user.username.clone()).unwrap_or_default());

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/blogs">"Inkpost"</a>
            <a href="/blogs">"Blogs"</a>
            {move || {
                if auth.with(|state| state.authenticated) {
                    let services = services.clone();
                    view! {
                        <a href="/dashboard">"Dashboard"</a>
                        <a href="/profile">{username}</a>
                        <Show when=is_admin>
                            <a href="/admin/pending-blogs">"Pending"</a>
                        </Show>
                        <button class="nav-bar__logout" on:click=move |_| services.auth.logout()>
                            "Log out"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <a href="/login">"Log in"</a>
                        <a href="/signup">"Sign up"</a>
                    }
                        .into_any()
                }
            }}
        </nav>
    }
}
