//! Account page: username, password and email verification.

use leptos::prelude::*;

use crate::app::Services;
use crate::state::auth::AuthState;
use crate::util::validation::{check_username, validate_password_change};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<Services>();
    let notices = services.notices.clone();

    let username = RwSignal::new(auth.with_untracked(|state| {
        state.user.as_ref().map(|user| user.username.clone()).unwrap_or_default()
    }));
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());

    let user_id = move || auth.with(|state| state.user.as_ref().map(|user| user.id.clone()));
    let email = move || auth.with(|state| state.user.as_ref().map(|user| user.email.clone()).unwrap_or_default());
    let role = move || auth.with(|state| state.role().unwrap_or_default().to_owned());
    let verified = move || auth.with(|state| state.user.as_ref().is_some_and(|user| user.is_verified));
    let updating = move || auth.with(|state| state.update_loading);

    let on_username = {
        let services = services.clone();
        let notices = notices.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let value = username.get().trim().to_owned();
            if let Err(message) = check_username(&value) {
                notices.error(message);
                return;
            }
            let Some(id) = user_id() else {
                notices.error("User ID not found");
                return;
            };
            let auth = services.auth.clone();
            leptos::task::spawn_local(async move {
                let _ = auth.update_username(&id, &value).await;
            });
        }
    };

    let on_password = {
        let services = services.clone();
        let notices = notices.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let (current, new, confirm) = (current_password.get(), new_password.get(), confirm_password.get());
            if let Err(message) = validate_password_change(&current, &new, &confirm) {
                notices.error(message);
                return;
            }
            let Some(id) = user_id() else {
                notices.error("User ID not found");
                return;
            };
            let auth = services.auth.clone();
            leptos::task::spawn_local(async move {
                if auth.update_password(&id, &current, &new).await.is_ok() {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
            });
        }
    };

    let on_send_code = {
        let services = services.clone();
        move |_| {
            let auth = services.auth.clone();
            let address = email();
            leptos::task::spawn_local(async move {
                let _ = auth.send_verification_mail(&address).await;
            });
        }
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = code.get().trim().to_owned();
        if value.is_empty() {
            notices.error("Enter the verification code");
            return;
        }
        let auth = services.auth.clone();
        let address = email();
        leptos::task::spawn_local(async move {
            if auth.verify_email(&value, &address).await.is_ok() {
                code.set(String::new());
            }
        });
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <dl class="profile-page__facts">
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Role"</dt>
                <dd>{role}</dd>
                <dt>"Verified"</dt>
                <dd>{move || if verified() { "Yes" } else { "No" }}</dd>
            </dl>

            <form class="profile-form" on:submit=on_username>
                <h2>"Username"</h2>
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <button type="submit" disabled=updating>"Save username"</button>
            </form>

            <form class="profile-form" on:submit=on_password>
                <h2>"Password"</h2>
                <input
                    type="password"
                    placeholder="Current password"
                    prop:value=move || current_password.get()
                    on:input=move |ev| current_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="New password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm new password"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=updating>"Change password"</button>
            </form>

            <Show when=move || !verified()>
                <section class="profile-form">
                    <h2>"Verify email"</h2>
                    <button type="button" on:click=on_send_code.clone() disabled=updating>
                        "Send code"
                    </button>
                    <form on:submit=on_verify.clone()>
                        <input
                            type="text"
                            placeholder="Verification code"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                        <button type="submit" disabled=updating>"Verify"</button>
                    </form>
                </section>
            </Show>
        </div>
    }
}
