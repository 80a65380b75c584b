//! PostgreSQL-backed `UserStore` over one process-wide pool.

use super::UserStore;
use crate::config::Config;
use crate::error::AppError;
use crate::model::{User, UserInput};
use crate::sql;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open the pool. The pool is shared by every request for the life of the process.
pub async fn connect(config: &Config) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Create the users table if it does not exist yet.
pub async fn ensure_users_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(sql::CREATE_TABLE).execute(pool).await?;
    tracing::info!(table = sql::TABLE, "table ready");
    Ok(())
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        PgUserStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        tracing::debug!(sql = %sql::SELECT_ALL, "query");
        let users = sqlx::query_as::<_, User>(sql::SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn get(&self, id: i32) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = %sql::SELECT_BY_ID, id, "query");
        let user = sqlx::query_as::<_, User>(sql::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create(&self, input: UserInput) -> Result<User, AppError> {
        tracing::debug!(sql = %sql::INSERT, "query");
        let id: i32 = sqlx::query_scalar(sql::INSERT)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(User::from_input(id, input))
    }

    async fn update(&self, id: i32, input: UserInput) -> Result<Option<User>, AppError> {
        tracing::debug!(sql = %sql::UPDATE, id, "query");
        let result = sqlx::query(sql::UPDATE)
            .bind(&input.name)
            .bind(&input.email)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get(id).await
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        if self.get(id).await?.is_none() {
            return Ok(false);
        }
        tracing::debug!(sql = %sql::DELETE, id, "query");
        sqlx::query(sql::DELETE).bind(id).execute(&self.pool).await?;
        Ok(true)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query(sql::PING).fetch_optional(&self.pool).await?;
        Ok(())
    }
}
