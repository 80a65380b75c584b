//! Route table for the users resource.

use crate::handlers::users::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const USERS_PATH: &str = "/api/go/users";
pub const USER_PATH: &str = "/api/go/users/:id";

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route(USERS_PATH, get(list).post(create))
        .route(USER_PATH, get(read).put(update).delete(delete_handler))
        .with_state(state)
}
