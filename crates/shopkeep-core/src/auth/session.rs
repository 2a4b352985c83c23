//! In-memory session state.
//!
//! `SessionState` is a tagged state machine: the bearer token only
//! exists inside the `Authenticated` variant, so "token present iff
//! authenticated" holds by construction. `SessionHandle` is the shared
//! owner of that state; screens subscribe to it through a watch
//! channel and the HTTP pipeline uses it for two things only: reading
//! the current token and forcing a sign-out on a rejected call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use super::credentials::{CredentialRecord, CredentialStore};

/// Delay before retrying a failed credential clear.
const CLEAR_RETRY_DELAY_SECS: u64 = 5;

/// Who the client is currently signed in as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub token: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl Identity {
    /// Build an identity from a stored record, if it holds a usable token.
    pub fn from_record(record: CredentialRecord) -> Option<Self> {
        if !record.has_token() {
            return None;
        }
        Some(Self {
            token: record.token.unwrap_or_default(),
            email: record.email,
            role: record.role,
        })
    }

    pub fn to_record(&self) -> CredentialRecord {
        CredentialRecord {
            token: Some(self.token.clone()),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Process start: the stored record has not been read yet.
    #[default]
    Restoring,
    Unauthenticated,
    /// A sign-in is in flight.
    Authenticating,
    Authenticated(Identity),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn is_restoring(&self) -> bool {
        matches!(self, SessionState::Restoring)
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated(identity) => Some(identity.token.as_str()),
            _ => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated(identity) => identity.email.as_deref(),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated(identity) => identity.role.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Shared {
    state: watch::Sender<SessionState>,
    store: CredentialStore,
    /// Bumped on every sign-out. In-flight sign-ins compare against it
    /// so a stale login response cannot re-authenticate the user.
    generation: AtomicU64,
}

/// Shared session state. Clones are cheap and all refer to the same
/// session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inner: Arc<Shared>,
}

impl SessionHandle {
    pub fn new(store: CredentialStore) -> Self {
        let (state, _) = watch::channel(SessionState::Restoring);
        Self {
            inner: Arc::new(Shared {
                state,
                store,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Current state, cloned out of the channel.
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to session transitions. The receiver immediately sees
    /// the current state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// The bearer token for the current session, read at call time.
    pub fn bearer_token(&self) -> Option<String> {
        self.inner.state.borrow().token().map(str::to_string)
    }

    pub(crate) fn store(&self) -> &CredentialStore {
        &self.inner.store
    }

    pub(crate) fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    pub(crate) fn set_state(&self, state: SessionState) {
        self.inner.state.send_replace(state);
    }

    /// Drop the session: clear the stored record and transition to
    /// `Unauthenticated`. Used both by explicit sign-out and by the
    /// HTTP pipeline when the backend rejects the credential.
    ///
    /// The in-memory transition always happens. If the store clear
    /// fails, memory stays authoritative for this process; the clear is
    /// retried once in the background and an unreadable record degrades
    /// to "logged out" on the next restore anyway.
    pub async fn force_sign_out(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);

        if let Err(e) = self.inner.store.clear().await {
            warn!(error = %e, "failed to clear credential record, retrying in background");
            let store = self.inner.store.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(CLEAR_RETRY_DELAY_SECS)).await;
                if let Err(e) = store.clear().await {
                    warn!(error = %e, "background credential clear failed");
                }
            });
        }

        if self.snapshot() != SessionState::Unauthenticated {
            info!("session signed out");
        }
        self.set_state(SessionState::Unauthenticated);
    }
}
