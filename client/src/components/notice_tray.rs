//! Toast tray for [`Notices`](crate::state::notices::Notices).
//!
//! Each notice dismisses itself after `NOTICE_DURATION_MS` in the browser;
//! server renders show whatever is queued and never schedule anything.

use leptos::prelude::*;

use crate::app::Services;
use crate::state::notices::{Notice, NoticeState};

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| view! { <NoticeItem notice=notice/> }
            />
        </div>
    }
}

#[component]
fn NoticeItem(notice: Notice) -> impl IntoView {
    let handle = expect_context::<Services>().notices;
    let id = notice.id;

    #[cfg(feature = "hydrate")]
    {
        let handle = handle.clone();
        gloo_timers::callback::Timeout::new(crate::state::notices::NOTICE_DURATION_MS, move || handle.dismiss(id))
            .forget();
    }

    view! {
        <div class=format!("notice {}", notice.kind.css_modifier()) role="alert">
            <span class="notice__message">{notice.message}</span>
            <button
                class="notice__close"
                title="Dismiss"
                aria-label="Dismiss"
                on:click=move |_| handle.dismiss(id)
            >
                "✕"
            </button>
        </div>
    }
}
