//! Landing page for role-guard rejections.

use leptos::prelude::*;

#[component]
pub fn NotAuthorizedPage() -> impl IntoView {
    view! {
        <div class="not-authorized">
            <h1>"Not authorized"</h1>
            <p>"Your account does not have access to that page."</p>
            <a href="/dashboard">"Back to dashboard"</a>
        </div>
    }
}
