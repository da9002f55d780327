use crate::core::errors::ProbeError;
use crate::core::models::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ProbeError>;
}

pub mod in_memory;
pub mod postgres;
