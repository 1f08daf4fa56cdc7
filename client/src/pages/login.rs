//! Login page: email + password with "remember me", plus password reset.
//!
//! Success needs no explicit navigation: the surrounding `GuestGuard`
//! redirects to the dashboard as soon as auth flips to authenticated.

use leptos::prelude::*;

use crate::app::Services;
use crate::net::types::LoginRequest;
use crate::util::validation::check_email;

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = {
        let services = services.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let email_value = email.get().trim().to_owned();
            if let Err(message) = check_email(&email_value) {
                info.set(message.to_owned());
                return;
            }
            if password.get().is_empty() {
                info.set("Enter your password.".to_owned());
                return;
            }
            info.set(String::new());
            busy.set(true);
            let credentials = LoginRequest { email: email_value, password: password.get(), remember_me: remember_me.get() };
            let auth = services.auth.clone();
            leptos::task::spawn_local(async move {
                auth.login(credentials).await;
                busy.set(false);
            });
        }
    };

    let on_forgot = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_owned();
        if let Err(message) = check_email(&email_value) {
            info.set(format!("{message} We will send the reset link there."));
            return;
        }
        let auth = services.auth.clone();
        leptos::task::spawn_local(async move {
            // Failures are already surfaced as notices.
            let _ = auth.forgot_password(&email_value).await;
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <a class="login-link" href="#" on:click=on_forgot>"Forgot password?"</a>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
