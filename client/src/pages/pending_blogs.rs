//! Admin moderation queue.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::Services;
use crate::components::loader::Loader;
use crate::net::types::Blog;
use crate::state::auth::AuthState;
use crate::state::blogs::{BlogState, Verdict};

#[component]
pub fn PendingBlogsPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let blogs = expect_context::<RwSignal<BlogState>>();

    {
        let store = services.blogs.clone();
        Effect::new(move || {
            let store = store.clone();
            leptos::task::spawn_local(async move { store.fetch_pending_blogs().await });
        });
    }

    view! {
        <div class="pending-page">
            <h1>"Pending posts"</h1>
            {move || {
                let state = blogs.get();
                if state.loading && state.pending.is_empty() {
                    view! { <Loader/> }.into_any()
                } else if state.pending.is_empty() {
                    view! { <p class="pending-page__empty">"Nothing waiting for review."</p> }.into_any()
                } else {
                    view! {
                        <table class="pending-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Submitted"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || blogs.get().pending
                                    key=|blog| blog.id.clone()
                                    children=move |blog| view! { <PendingRow blog=blog/> }
                                />
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn PendingRow(blog: Blog) -> impl IntoView {
    let services = expect_context::<Services>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let busy = RwSignal::new(false);
    let Blog { id, title, createdat, .. } = blog;
    let href = format!("/blogs/{id}");
    let submitted = createdat.unwrap_or_default();

    let decide = move |verdict: Verdict| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let store = services.blogs.clone();
        let id = id.clone();
        let admin = auth.with_untracked(|state| state.user.as_ref().map(|user| user.username.clone()));
        leptos::task::spawn_local(async move {
            match verdict {
                Verdict::Approve => store.approve_blog(&id, admin.as_deref()).await,
                Verdict::Reject => store.reject_blog(&id, admin.as_deref()).await,
            }
            busy.set(false);
        });
    };
    let approve = decide.clone();

    view! {
        <tr>
            <td>
                <a href=href>{title}</a>
            </td>
            <td>{submitted}</td>
            <td>
                <button on:click=move |_| approve(Verdict::Approve) disabled=move || busy.get()>
                    "Approve"
                </button>
                <button on:click=move |_| decide(Verdict::Reject) disabled=move || busy.get()>
                    "Reject"
                </button>
            </td>
        </tr>
    }
}
