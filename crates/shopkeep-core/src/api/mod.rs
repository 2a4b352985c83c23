//! REST API client module for the business-management backend.
//!
//! This module provides the `ApiClient` for all outbound HTTP traffic.
//! It is the single place where the bearer credential is attached and
//! where a rejected credential is acted upon: any 401 drops the session
//! through the `SessionHandle` before the error reaches the caller.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
