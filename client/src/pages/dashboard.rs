//! Signed-in landing page.
//!
//! Admins also get the content-generation triggers (new topic, generate post
//! for a topic id) and a link to the moderation queue.

use leptos::prelude::*;

use crate::app::Services;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|state| state.user.as_ref().map(|user| format!("Hello, {}", user.username)).unwrap_or_default())
    };
    let unverified = move || auth.with(|state| state.user.as_ref().is_some_and(|user| !user.is_verified));
    let is_admin = move || auth.with(|state| state.user.as_ref().is_some_and(|user| user.role.is_admin()));

    view! {
        <div class="dashboard-page">
            <h1>{greeting}</h1>
            <Show when=unverified>
                <p class="dashboard-page__hint">
                    "Your email is not verified yet. "
                    <a href="/profile">"Verify it from your profile."</a>
                </p>
            </Show>
            <section class="dashboard-page__links">
                <a href="/blogs">"Browse published posts"</a>
                <a href="/profile">"Manage your account"</a>
            </section>
            <Show when=is_admin>
                <AdminTools/>
            </Show>
        </div>
    }
}

#[component]
fn AdminTools() -> impl IntoView {
    let services = expect_context::<Services>();
    let topic = RwSignal::new(String::new());
    let topic_id = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_add_topic = {
        let blogs = services.blogs.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let value = topic.get().trim().to_owned();
            if value.is_empty() || busy.get() {
                return;
            }
            busy.set(true);
            let blogs = blogs.clone();
            leptos::task::spawn_local(async move {
                blogs.add_topic(&value).await;
                topic.set(String::new());
                busy.set(false);
            });
        }
    };

    let on_add_blog = {
        let blogs = services.blogs.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let value = topic_id.get().trim().to_owned();
            if value.is_empty() || busy.get() {
                return;
            }
            busy.set(true);
            let blogs = blogs.clone();
            leptos::task::spawn_local(async move {
                blogs.add_blog(&value).await;
                busy.set(false);
            });
        }
    };

    view! {
        <section class="admin-tools">
            <h2>"Admin"</h2>
            <a href="/admin/pending-blogs">"Review pending posts"</a>
            <form class="admin-tools__form" on:submit=on_add_topic>
                <input
                    type="text"
                    placeholder="New topic"
                    prop:value=move || topic.get()
                    on:input=move |ev| topic.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Add topic"</button>
            </form>
            <form class="admin-tools__form" on:submit=on_add_blog>
                <input
                    type="text"
                    placeholder="Topic id"
                    prop:value=move || topic_id.get()
                    on:input=move |ev| topic_id.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Generate post"</button>
            </form>
        </section>
    }
}
