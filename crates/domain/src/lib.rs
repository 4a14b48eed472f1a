//! Domain types for the userdeck user-management layer.
//!
//! Holds the `User` account record and the two error families: the typed
//! failures callers branch on (`UserError`) and the raw fault a datastore
//! adapter reports (`StoreError`).

#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type returned by every caller-facing user operation.
pub type UserResult<T> = Result<T, UserError>;

/// One account record, mirroring the `users` table.
///
/// The service layer treats this as an opaque structured value: it is read
/// from and written to the datastore without validation or transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique text identifier, assigned by the caller.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address as stored; not validated at this layer.
    pub email: String,
    /// Whether the email address has been verified.
    pub email_verified: bool,
    /// Optional avatar image URL.
    pub image: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Typed failures surfaced by the user service.
#[derive(Debug, Error)]
pub enum UserError {
    /// No user matched the requested id, or the lookup itself faulted.
    ///
    /// Carries the id that was looked up. Lookup faults deliberately map to
    /// this same variant; see `StoreBackedUserService::get_user`.
    #[error("user not found: {user_id}")]
    NotFound {
        /// The id the caller asked for.
        user_id: String,
    },

    /// The underlying datastore faulted during a create or delete.
    ///
    /// Carries a human-readable description of the original fault and
    /// nothing else.
    #[error("datastore error: {0}")]
    Datastore(String),
}

impl UserError {
    /// Builds a `NotFound` error for the given id.
    #[must_use]
    pub fn not_found(user_id: impl Into<String>) -> Self {
        Self::NotFound {
            user_id: user_id.into(),
        }
    }
}

/// Fault reported by a datastore adapter.
///
/// This is the collaborator-side error: adapters produce it, the service
/// maps it into a `UserError`, and it never crosses the caller-facing
/// interface.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    /// Builds a store fault with the given description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
