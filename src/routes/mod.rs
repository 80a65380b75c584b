//! Router assembly: route tables, fallback, middleware chain, tracing and body limit.

mod common;
mod users;

pub use common::common_routes;
pub use users::{user_routes, USERS_PATH, USER_PATH};

use crate::handlers::method_not_allowed;
use crate::middleware;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::StatusCode, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

async fn fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// The full application. The middleware chain also wraps both fallbacks, so a preflight to
/// any path is answered. The 405 fallback only reaches routes merged before it.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    let router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(user_routes(state))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(fallback);
    middleware::apply(router).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(body_limit_bytes)),
    )
}
