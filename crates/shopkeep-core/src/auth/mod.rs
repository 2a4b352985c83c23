//! Authentication module for managing the user session.
//!
//! This module provides:
//! - `CredentialStore`: durable token/identity storage surviving restarts
//! - `SessionState` / `SessionHandle`: the in-memory session state machine
//!   with watch-based subscription and the forced sign-out capability
//! - `SessionManager`: the public restore/sign-in/sign-up/sign-out surface
//!
//! The in-memory session is the source of truth for the current process;
//! the credential record on disk is what makes it survive a restart.

pub mod credentials;
pub mod manager;
pub mod session;

pub use credentials::{CredentialError, CredentialRecord, CredentialStore};
pub use manager::{AuthError, SessionManager};
pub use session::{Identity, SessionHandle, SessionState};
