//! Session lifecycle operations.
//!
//! `SessionManager` is the only entry point for changing the session:
//! restore at startup, sign-in/sign-up from the auth screens, sign-out
//! from the profile screen. Screens get outcomes back as `Result`
//! values; nothing here panics across the component boundary.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, ApiError};

use super::session::{Identity, SessionHandle, SessionState};

/// Shown when the endpoint cannot be reached or times out.
const NETWORK_FAILURE_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// Shown when a sign-out lands while a sign-in is still in flight and
/// the stale result is discarded.
const INTERRUPTED_MESSAGE: &str = "Sign-in was interrupted. Please try again.";

#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field was empty. Caught before any I/O.
    #[error("All fields are required")]
    InvalidInput,

    /// The endpoint refused the request, or could not be reached.
    /// Carries the server's message when one was supplied.
    #[error("{0}")]
    Rejected(String),

    /// Credentials could not be persisted. The session is not
    /// activated: a token that cannot survive a restart is not
    /// treated as active.
    #[error("Could not save credentials: {0}")]
    Storage(String),
}

/// Owns the authentication state machine.
pub struct SessionManager {
    session: SessionHandle,
    api: ApiClient,
}

impl SessionManager {
    pub fn new(session: SessionHandle, api: ApiClient) -> Self {
        Self { session, api }
    }

    /// The shared session handle, for wiring subscribers.
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.snapshot()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<SessionState> {
        self.session.subscribe()
    }

    /// Read the stored credential record and settle the session into
    /// `Authenticated` or `Unauthenticated`. Runs the read exactly
    /// once per process: later calls return the current state without
    /// touching storage. Never fails - an unreadable store means "no
    /// credentials".
    pub async fn restore(&self) -> SessionState {
        if !self.session.snapshot().is_restoring() {
            return self.session.snapshot();
        }

        let record = match self.session.store().read().await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "could not read stored credentials, treating as logged out");
                Default::default()
            }
        };

        match Identity::from_record(record) {
            Some(identity) => {
                info!(email = identity.email.as_deref().unwrap_or(""), "session restored");
                self.session
                    .set_state(SessionState::Authenticated(identity));
            }
            None => {
                debug!("no stored session");
                self.session.set_state(SessionState::Unauthenticated);
            }
        }

        self.session.snapshot()
    }

    /// Authenticate against the backend and activate the session.
    ///
    /// On success the credential record is persisted first, then the
    /// in-memory state flips to `Authenticated`; a persist failure
    /// leaves the session signed out. On any endpoint or transport
    /// failure the record is untouched and the session returns to
    /// `Unauthenticated`.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        let generation = self.session.generation();
        self.session.set_state(SessionState::Authenticating);

        let response = match self.api.login(email, password).await {
            Ok(response) => response,
            Err(e) => {
                // A 401 already dropped the session inside the
                // pipeline; make sure every other failure lands in
                // Unauthenticated too.
                self.session.set_state(SessionState::Unauthenticated);
                return Err(Self::rejection(e));
            }
        };

        if self.session.generation() != generation {
            debug!("discarding sign-in result, session was signed out while in flight");
            return Err(AuthError::Rejected(INTERRUPTED_MESSAGE.to_string()));
        }

        if response.token.is_empty() {
            self.session.set_state(SessionState::Unauthenticated);
            return Err(AuthError::Rejected(
                "Login response did not include a token".to_string(),
            ));
        }

        let identity = Identity {
            token: response.token,
            email: response.email.or_else(|| Some(email.to_string())),
            role: response.role,
        };

        if let Err(e) = self.session.store().write(&identity.to_record()).await {
            warn!(error = %e, "could not persist credentials, not activating session");
            self.session.set_state(SessionState::Unauthenticated);
            return Err(AuthError::Storage(e.to_string()));
        }

        // A sign-out may have raced the persist; do not resurrect a
        // session the user just discarded.
        if self.session.generation() != generation {
            if let Err(e) = self.session.store().clear().await {
                warn!(error = %e, "failed to clear credentials after interrupted sign-in");
            }
            return Err(AuthError::Rejected(INTERRUPTED_MESSAGE.to_string()));
        }

        info!(email = %email, "signed in");
        self.session
            .set_state(SessionState::Authenticated(identity));
        Ok(())
    }

    /// Register a new account. Stateless: no session transition and
    /// nothing is persisted locally, success just means the account
    /// exists and the user can sign in.
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        match self.api.register(name, email, password).await {
            Ok(()) => {
                info!(email = %email, "account registered");
                Ok(())
            }
            Err(e) => Err(Self::rejection(e)),
        }
    }

    /// Sign out: clear stored credentials and drop the in-memory
    /// session. Cannot fail, and calling it twice is the same as once.
    pub async fn sign_out(&self) {
        self.session.force_sign_out().await;
    }

    fn rejection(error: ApiError) -> AuthError {
        match error {
            ApiError::Timeout | ApiError::Network(_) => {
                AuthError::Rejected(NETWORK_FAILURE_MESSAGE.to_string())
            }
            other => AuthError::Rejected(other.to_string()),
        }
    }
}
