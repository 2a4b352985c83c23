//! Core library for Shopkeep - a mobile client for a business-management
//! backend.
//!
//! This crate owns everything below the screen layer:
//!
//! - `auth`: the session state machine, credential persistence, and the
//!   public sign-in/sign-out/restore operations
//! - `api`: the authenticated HTTP pipeline and typed endpoint wrappers
//! - `models`: serde models for the backend's JSON payloads
//! - `config`: client configuration (base URL, timeouts)
//!
//! UI shells (mobile, desktop) consume `SessionManager` for auth actions,
//! subscribe to session state through `SessionManager::subscribe`, and
//! make business calls through `ApiClient`. The pipeline attaches the
//! bearer token automatically and signs the user out on any 401.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use auth::{
    AuthError, CredentialRecord, CredentialStore, Identity, SessionHandle, SessionManager,
    SessionState,
};
pub use config::Config;
