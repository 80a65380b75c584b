//! users-api: a single-resource CRUD service for users over PostgreSQL.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use model::{User, UserInput};
pub use routes::{app, common_routes, user_routes};
pub use state::AppState;
pub use store::{ensure_users_table, MemoryUserStore, PgUserStore, UserStore};
