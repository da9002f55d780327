use crate::core::errors::ProbeError;
use crate::core::models::user::User;
use crate::infrastructure::storage::Storage;
use log::{debug, info};

pub struct ProbeService<S: Storage> {
    storage: S,
}

impl<S: Storage> ProbeService<S> {
    pub fn new(storage: S) -> Self {
        ProbeService { storage }
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ProbeError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ProbeError::MissingEmail);
        }
        info!("Looking up user with email: {}", email);
        let user = self.storage.get_user_by_email(email).await?;
        match &user {
            Some(found) => debug!("Found user {}", found.id),
            None => debug!("No user registered under {}", email),
        }
        Ok(user)
    }
}

/// Pretty JSON for a found record, `null` otherwise.
pub fn render_user(user: Option<&User>) -> Result<String, ProbeError> {
    Ok(serde_json::to_string_pretty(&user)?)
}

/// Compares `password` against a stored bcrypt `hash`.
///
/// A mismatch is `Ok(false)`; only a hash that bcrypt cannot parse is an error.
pub fn check_password(password: &str, hash: &str) -> Result<bool, ProbeError> {
    let valid = bcrypt::verify(password, hash)?;
    debug!("bcrypt comparison finished");
    Ok(valid)
}

pub fn render_check(valid: bool) -> String {
    format!("Password valid: {}", valid)
}
