//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. [`AuthStore`] owns the session
//! controller and installs the API client's unauthorized hook, so a 401/403
//! from any request logs the user out.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is pushed as an error notice. `login` swallows its error
//! after that; the other operations also return it so forms can stay put.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::de::IgnoredAny;
use serde_json::json;

use super::notices::Notices;
use super::store::Store;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{
    LoginRequest, MessageResponse, RegisterRequest, TokenResponse, User, VerifyEmailResponse,
};
use crate::session::controller::SessionController;
use crate::util::host::{Host, HostKind};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub authenticated: bool,
    /// True until the first `initialize` settles. Guards wait while set.
    pub loading: bool,
    /// True while a profile or account mutation is in flight.
    pub update_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, authenticated: false, loading: true, update_loading: false }
    }
}

impl AuthState {
    /// Forget the user. `loading` is left alone.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.authenticated = false;
    }

    /// Forget the user and settle loading.
    pub fn sign_out_settled(&mut self) {
        self.sign_out();
        self.loading = false;
    }

    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.role.as_str())
    }
}

pub struct AuthStore {
    kind: HostKind,
    state: Store<AuthState>,
    api: Arc<ApiClient>,
    session: Arc<SessionController>,
    notices: Notices,
    booted: AtomicBool,
}

impl AuthStore {
    pub fn new(host: &Host, api: Arc<ApiClient>, notices: Notices) -> Self {
        let state = Store::new(AuthState::default());
        let session = Arc::new(SessionController::new(host, api.default_headers()));

        let expired_state = state.clone();
        session.on_expired(move || expired_state.update(AuthState::sign_out_settled));

        let hook_state = state.clone();
        let hook_session = session.clone();
        api.on_unauthorized(move || {
            log::info!("backend rejected credentials; ending session");
            hook_session.end();
            hook_state.update(AuthState::sign_out);
        });

        Self { kind: host.kind, state, api, session, notices, booted: AtomicBool::new(false) }
    }

    pub fn state(&self) -> &Store<AuthState> {
        &self.state
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Run [`initialize`](Self::initialize) once per app mount; later calls
    /// are no-ops.
    pub async fn bootstrap(&self) {
        if self.booted.swap(true, Ordering::SeqCst) {
            return;
        }
        self.initialize().await;
    }

    /// Rebuild auth state from the stored token.
    pub async fn initialize(&self) {
        if self.kind == HostKind::Headless {
            self.state.update(AuthState::sign_out_settled);
            return;
        }

        self.state.update(|s| s.loading = true);
        match self.restore().await {
            Ok(Some(user)) => self.state.update(|s| {
                s.user = Some(user);
                s.authenticated = true;
                s.loading = false;
            }),
            Ok(None) => self.handle_session_reset(None),
            Err(err) => {
                log::warn!("session restore failed: {err}");
                self.handle_session_reset(Some(&err.message));
            }
        }
        self.state.update(|s| s.loading = false);
    }

    async fn restore(&self) -> Result<Option<User>, ApiError> {
        let Some(token) = self.session.storage().get() else {
            return Ok(None);
        };
        if !self.session.codec().is_valid(&token) {
            return Ok(None);
        }

        let persistent = self.session.storage().is_persistent();
        self.session.establish(&token, persistent);

        let subject = self
            .session
            .codec()
            .decode(&token)
            .and_then(|claims| claims.subject())
            .ok_or_else(|| ApiError::new("Session token does not identify a user"))?;
        let user: User = self.api.get(&format!("/users/{subject}")).await?;
        Ok(Some(user))
    }

    /// End the session, drop to logged-out, and show `reason` if given.
    pub fn handle_session_reset(&self, reason: Option<&str>) {
        self.session.end();
        self.state.update(AuthState::sign_out_settled);
        if let Some(reason) = reason {
            self.notices.error(reason);
        }
    }

    /// Exchange credentials for a token. Failures become a notice and a
    /// logged-out state; nothing is returned.
    pub async fn login(&self, credentials: LoginRequest) {
        match self.api.post::<_, TokenResponse>("/auth/login", &credentials).await {
            Ok(TokenResponse { token }) => {
                self.session.establish(&token, credentials.remember_me);
                self.initialize().await;
            }
            Err(err) => {
                self.notices.error(err.message);
                self.state.update(AuthState::sign_out_settled);
            }
        }
    }

    /// Complete an OAuth round-trip with the provider's verification token.
    /// The resulting session is always persistent.
    ///
    /// # Errors
    ///
    /// Returns the backend error after surfacing it as a notice.
    pub async fn oauth_login(&self, verify_token: &str) -> Result<(), ApiError> {
        let payload = json!({ "token": verify_token });
        match self.api.post::<_, TokenResponse>("/auth/oauth-login", &payload).await {
            Ok(TokenResponse { token }) => {
                self.session.establish(&token, true);
                self.initialize().await;
                Ok(())
            }
            Err(err) => {
                self.notices.error(err.message.clone());
                self.state.update(AuthState::sign_out_settled);
                Err(err)
            }
        }
    }

    /// Create an account, then log in with the same email and password.
    ///
    /// # Errors
    ///
    /// Returns the backend error so signup forms can stay on the page.
    pub async fn register(&self, request: RegisterRequest) -> Result<(), ApiError> {
        match self.api.post::<_, IgnoredAny>("/auth/register", &request).await {
            Ok(_) => {
                let RegisterRequest { email, password, .. } = request;
                self.login(LoginRequest { email, password, remember_me: false }).await;
                Ok(())
            }
            Err(err) => {
                self.notices.error(err.message.clone());
                self.state.update(AuthState::sign_out_settled);
                Err(err)
            }
        }
    }

    pub fn logout(&self) {
        self.session.end();
        self.state.update(AuthState::sign_out);
    }

    /// # Errors
    ///
    /// Returns the backend error after surfacing it as a notice.
    pub async fn update_username(&self, user_id: &str, username: &str) -> Result<(), ApiError> {
        let payload = json!({ "userId": user_id, "username": username });
        self.mutate(self.api.put::<_, IgnoredAny>("/users/update-username", &payload)).await?;
        self.state.update(|s| {
            if let Some(user) = s.user.as_mut() {
                user.username = username.to_owned();
            }
        });
        self.notices.success("Username updated successfully");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the backend error after surfacing it as a notice.
    pub async fn update_password(&self, user_id: &str, old_password: &str, new_password: &str) -> Result<(), ApiError> {
        let payload = json!({ "userId": user_id, "oldPassword": old_password, "newPassword": new_password });
        self.mutate(self.api.put::<_, IgnoredAny>("/users/update-password", &payload)).await?;
        self.notices.success("Password updated successfully");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the backend error after surfacing it as a notice.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let payload = json!({ "email": email.to_lowercase() });
        let body = self.mutate(self.api.post::<_, MessageResponse>("/email/password/reset", &payload)).await?;
        self.notices.success(body.message.unwrap_or_else(|| "Password reset email sent".to_owned()));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the backend error after surfacing it as a notice.
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), ApiError> {
        let payload = json!({ "token": token, "password": password });
        self.mutate(self.api.post::<_, IgnoredAny>("/users/reset-password", &payload)).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the backend error after surfacing it as a notice.
    pub async fn send_verification_mail(&self, email: &str) -> Result<(), ApiError> {
        let payload = json!({ "email": email });
        let body = self.mutate(self.api.post::<_, MessageResponse>("/email/verify", &payload)).await?;
        if let Some(message) = body.message {
            self.notices.success(message);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the backend error after surfacing it as a notice.
    pub async fn verify_email(&self, code: &str, email: &str) -> Result<(), ApiError> {
        let payload = json!({ "code": code, "email": email });
        let body = self
            .mutate(self.api.post::<_, VerifyEmailResponse>("/users/verify-email", &payload))
            .await?;
        self.state.update(|s| {
            if let Some(user) = s.user.as_mut() {
                user.is_verified = body.is_verified;
            }
        });
        Ok(())
    }

    /// Await `call` with `update_loading` raised, surfacing any error.
    async fn mutate<T>(&self, call: impl Future<Output = Result<T, ApiError>>) -> Result<T, ApiError> {
        self.state.update(|s| s.update_loading = true);
        let result = call.await;
        self.state.update(|s| s.update_loading = false);
        if let Err(err) = &result {
            self.notices.error(err.message.clone());
        }
        result
    }
}
