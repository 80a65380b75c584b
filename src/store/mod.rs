//! Persistence gateway for users: the `UserStore` seam plus its PostgreSQL and in-memory backings.

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::{connect, ensure_users_table, PgUserStore};

use crate::config::Config;
use crate::error::AppError;
use crate::model::{User, UserInput};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Insert and return the user with its store-assigned id.
    async fn create(&self, input: UserInput) -> Result<User, AppError>;

    /// Overwrite name and email. `None` when no row has this id.
    async fn update(&self, id: i32, input: UserInput) -> Result<Option<User>, AppError>;

    /// Returns false when no row has this id.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// Open the store selected by `DATABASE_URL` and make sure the table exists.
pub async fn open(config: &Config) -> Result<Arc<dyn UserStore>, AppError> {
    if config.uses_memory_store() {
        tracing::warn!("using in-memory user store; data is lost on exit");
        return Ok(Arc::new(MemoryUserStore::new()));
    }
    let pool = connect(config).await?;
    ensure_users_table(&pool).await?;
    Ok(Arc::new(PgUserStore::new(pool)))
}
