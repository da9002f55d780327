use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Email is required")]
    MissingEmail,
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Invalid password hash: {0}")]
    InvalidHash(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<sqlx::Error> for ProbeError {
    fn from(err: sqlx::Error) -> Self {
        ProbeError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::SerializationError(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for ProbeError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ProbeError::InvalidHash(err.to_string())
    }
}
