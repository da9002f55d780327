use crate::core::errors::ProbeError;
use crate::core::models::user::User;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users_by_email: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users_by_email: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seeds a record. A second insert with the same email replaces the first.
    pub async fn insert_user(&self, user: User) {
        let mut users_by_email = self.users_by_email.write().await;
        users_by_email.insert(user.email.clone(), user);
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ProbeError> {
        let users_by_email = self.users_by_email.read().await;
        Ok(users_by_email.get(email).cloned())
    }
}
