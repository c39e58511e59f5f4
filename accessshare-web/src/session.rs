use gloo_storage::{LocalStorage, Storage};
use shared::models::{DeleteAccountResponse, LoginRequest, RegisterRequest, User};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yewdux::Dispatch;

use crate::api::AccessShareClient;
use crate::models::session_state::SessionState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Local-storage key holding the "previously signed in" marker.
///
/// The value is the user's email. It is a signal, not a credential: its
/// presence only decides whether a verification round trip is attempted.
const USER_EMAIL_KEY: &str = "userEmail";

/// Read the persisted session marker.
pub(crate) fn stored_email() -> Option<String> {
    LocalStorage::get(USER_EMAIL_KEY).ok()
}

fn remember_email(email: &str) {
    if let Err(err) = LocalStorage::set(USER_EMAIL_KEY, email) {
        log(&format!("session: failed to persist marker: {err}"));
    }
}

fn forget_email() {
    LocalStorage::delete(USER_EMAIL_KEY);
}

/// Single source of truth for "who is signed in".
///
/// Wraps the shared API client and a dispatch handle to [`SessionState`].
/// Every operation settles its network call before touching state; there
/// are no optimistic updates and no retries.
#[derive(Clone)]
pub struct Session {
    client: AccessShareClient,
    dispatch: Dispatch<SessionState>,
}

impl Session {
    /// Build a session store around the shared API client.
    pub fn new(dispatch: Dispatch<SessionState>) -> Self {
        Self {
            client: AccessShareClient::shared(),
            dispatch,
        }
    }

    /// Re-verify the persisted marker against the backend.
    ///
    /// Without a marker this settles to signed-out without any network
    /// call. With one, the backend's answer wins: success replaces the
    /// current user, any failure clears both the state and the stale
    /// marker. Either way the loading flag ends false.
    pub async fn check(&self) {
        self.dispatch.set(SessionState::checking());

        let Some(email) = stored_email() else {
            log("session: no marker present, skipping verification");
            self.dispatch.set(SessionState::signed_out());
            return;
        };

        log(&format!("session: verifying session for {email}"));
        match self.client.me().await {
            Ok(user) => {
                log(&format!("session: verified as {}", user.username));
                self.dispatch.set(SessionState::signed_in(user));
            }
            Err(err) => {
                log(&format!("session: verification failed: {err}"));
                forget_email();
                self.dispatch.set(SessionState::signed_out());
            }
        }
    }

    /// Authenticate and establish a session.
    ///
    /// On success the returned user becomes the current one, the marker is
    /// persisted, and exactly one follow-up [`check`](Self::check) is
    /// scheduled. On failure state is left untouched and the error is
    /// handed back for the UI to present.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, reqwest::Error> {
        let user = self.client.login(credentials).await?;
        self.dispatch.set(SessionState::signed_in(user.clone()));
        remember_email(&user.email);

        // The login response is trusted for the immediate state change;
        // the canonical answer still comes from a verification round trip.
        let session = self.clone();
        spawn_local(async move { session.check().await });

        Ok(user)
    }

    /// Create an account and establish a session.
    pub async fn register(&self, details: &RegisterRequest) -> Result<User, reqwest::Error> {
        let user = self.client.register(details).await?;
        self.dispatch.set(SessionState::signed_in(user.clone()));
        remember_email(&user.email);
        Ok(user)
    }

    /// End the session.
    ///
    /// Synchronous from the caller's point of view: the backend is
    /// notified on a best-effort basis while local state and the marker
    /// are cleared immediately, whatever the network outcome.
    pub fn logout(&self) {
        let client = self.client.clone();
        spawn_local(async move {
            if let Err(err) = client.logout().await {
                log(&format!("session: logout request failed: {err}"));
            }
        });
        forget_email();
        self.dispatch.set(SessionState::signed_out());
    }

    /// Delete the current account.
    ///
    /// Local state is only cleared when the backend reports success; the
    /// marker is left for the next verification to purge. The full result
    /// is returned so the caller can present the outcome message.
    pub async fn delete_account(&self) -> Result<DeleteAccountResponse, reqwest::Error> {
        let result = self.client.delete_account().await?;
        if result.success {
            self.dispatch.set(SessionState::signed_out());
        }
        Ok(result)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn marker_roundtrip() {
        forget_email();
        assert!(stored_email().is_none());

        remember_email("a@x.com");
        assert_eq!(stored_email().as_deref(), Some("a@x.com"));

        forget_email();
        assert!(stored_email().is_none());
    }

    #[wasm_bindgen_test]
    async fn check_without_marker_settles_signed_out() {
        forget_email();

        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<SessionState>::new(&cx);
        let session = Session::new(dispatch.clone());

        // No marker: settles without touching the network.
        session.check().await;

        let state = dispatch.get();
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
        assert!(!state.is_loading);
    }

    #[wasm_bindgen_test]
    fn logout_clears_state_and_marker_immediately() {
        remember_email("a@x.com");

        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<SessionState>::new(&cx);
        let session = Session::new(dispatch.clone());

        session.logout();

        let state = dispatch.get();
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
        assert!(stored_email().is_none());
    }
}
