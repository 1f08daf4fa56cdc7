//! Signup page. A successful registration logs the user straight in.

use leptos::prelude::*;

use crate::app::Services;
use crate::net::types::RegisterRequest;
use crate::util::validation::validate_signup;

#[component]
pub fn SignupPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = RegisterRequest {
            username: username.get().trim().to_owned(),
            email: email.get().trim().to_lowercase(),
            password: password.get(),
        };
        if let Err(message) = validate_signup(&request.username, &request.email, &request.password, &confirm.get()) {
            info.set(message.to_owned());
            return;
        }
        info.set(String::new());
        busy.set(true);
        let auth = services.auth.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = auth.register(request).await {
                info.set(err.message);
            }
            busy.set(false);
        });
    };

    let field = move |kind: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {field("text", "Username", username)}
                    {field("email", "you@example.com", email)}
                    {field("password", "Password", password)}
                    {field("password", "Confirm password", confirm)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
