pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::ProbeError;
pub use crate::core::services::{ProbeService, check_password, render_check, render_user};
pub use infrastructure::storage::in_memory::InMemoryStorage;
pub use infrastructure::storage::postgres::PostgresStorage;

#[cfg(test)]
mod tests;
