//! User service port and store-backed implementation.
//!
//! The service owns exactly one concern: translating raw datastore outcomes
//! (value, absence, fault) into the typed results the capability interface
//! declares. No retries, no timeouts, no local recovery.

use std::sync::Arc;

use async_trait::async_trait;

use userdeck_domain::{StoreError, User, UserError, UserResult};

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Datastore collaborator port.
///
/// The fixed interface through which the external datastore is consumed.
/// Adapters report faults as [`StoreError`]; connection lifecycle, schema,
/// and transactions are the adapter's (or its owner's) responsibility.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Finds at most one user whose id equals `user_id`.
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, StoreError>;

    /// Inserts a user and returns the record as persisted, which may differ
    /// from the input (server-assigned defaults).
    async fn insert_returning(&self, user: &User) -> Result<User, StoreError>;

    /// Deletes the user whose id equals `user_id`. Deleting an absent id is
    /// not a fault.
    async fn delete_by_id(&self, user_id: &str) -> Result<(), StoreError>;
}

/// Capability interface for user management.
///
/// Three operations, each a single datastore round trip with a typed
/// success/failure outcome. Bound to a concrete store via constructor
/// injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Returns the user whose id equals `user_id`.
    ///
    /// Fails with [`UserError::NotFound`] if no such record exists or if the
    /// lookup itself faults.
    async fn get_user(&self, user_id: &str) -> UserResult<User>;

    /// Persists a new user and returns the record as stored.
    ///
    /// Fails with [`UserError::Datastore`] if the insert does not succeed.
    async fn create_user(&self, user: User) -> UserResult<User>;

    /// Deletes the user with the given id.
    ///
    /// Succeeds whether or not the id exists; fails with
    /// [`UserError::Datastore`] only if the underlying delete faults.
    async fn delete_user(&self, user_id: &str) -> UserResult<()>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// [`UserService`] implementation bound to a [`UserStore`].
#[derive(Clone)]
pub struct StoreBackedUserService {
    store: Arc<dyn UserStore>,
}

impl StoreBackedUserService {
    /// Creates a service backed by the given store.
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for StoreBackedUserService {
    /// Carried-over behavior: a faulted lookup is reported as `NotFound`,
    /// the same as a genuine absence. Callers cannot distinguish "no such
    /// user" from "datastore unreachable" through the error type; the fault
    /// branch logs at warn level so operators can.
    async fn get_user(&self, user_id: &str) -> UserResult<User> {
        match self.store.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(UserError::not_found(user_id)),
            Err(fault) => {
                tracing::warn!(user_id, %fault, "user lookup faulted; reporting not-found");
                Err(UserError::not_found(user_id))
            }
        }
    }

    async fn create_user(&self, user: User) -> UserResult<User> {
        self.store
            .insert_returning(&user)
            .await
            .map_err(|fault| UserError::Datastore(fault.to_string()))
    }

    async fn delete_user(&self, user_id: &str) -> UserResult<()> {
        self.store
            .delete_by_id(user_id)
            .await
            .map_err(|fault| UserError::Datastore(fault.to_string()))
    }
}
