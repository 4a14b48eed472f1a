//! In-memory user store for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use userdeck_application::UserStore;
use userdeck_domain::{StoreError, User};

/// In-memory implementation of the user store port.
///
/// Backed by a `HashMap` keyed on the user id. Supports injecting a
/// one-shot fault so callers can exercise the service's fault paths
/// without a database.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
    fault: RwLock<Option<String>>,
}

impl InMemoryUserStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            fault: RwLock::new(None),
        }
    }

    /// Makes the next store operation fail with the given message.
    pub async fn inject_fault(&self, message: impl Into<String>) {
        *self.fault.write().await = Some(message.into());
    }

    async fn take_fault(&self) -> Result<(), StoreError> {
        if let Some(message) = self.fault.write().await.take() {
            return Err(StoreError::new(message));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        self.take_fault().await?;
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn insert_returning(&self, user: &User) -> Result<User, StoreError> {
        self.take_fault().await?;

        let mut users = self.users.write().await;
        if users.contains_key(user.id.as_str()) {
            return Err(StoreError::new(format!(
                "duplicate key: user '{}' already exists",
                user.id
            )));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(user.clone())
    }

    async fn delete_by_id(&self, user_id: &str) -> Result<(), StoreError> {
        self.take_fault().await?;
        self.users.write().await.remove(user_id);
        Ok(())
    }
}
