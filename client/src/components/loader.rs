//! Full-page loading placeholder shown while auth resolves.

use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loader" role="status">
            <span class="loader__spinner" aria-hidden="true"></span>
            <p class="loader__label">{label}</p>
        </div>
    }
}
