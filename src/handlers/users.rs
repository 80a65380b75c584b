//! User CRUD handlers: list, get, create, update, delete.

use crate::error::AppError;
use crate::model::{self, User};
use crate::state::AppState;
use axum::{
    body::{Body, Bytes},
    extract::{rejection::BytesRejection, Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const DELETED_MESSAGE: &str = "User deleted";

/// Non-numeric ids are a bad request. Numeric ids outside the `SERIAL` range can never have
/// been assigned, so they are simply not found.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    let n: i64 = id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))?;
    i32::try_from(n).map_err(|_| AppError::NotFound(id_str.to_string()))
}

/// Content type is stamped by the middleware chain, not here.
fn json_ok<T: Serialize + ?Sized>(value: &T) -> Result<Response, AppError> {
    Ok((StatusCode::OK, Body::from(model::encode(value)?)).into_response())
}

pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let users = state.store.list().await?;
    json_ok(&users)
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let user = state.store.get(id).await?.ok_or_else(|| AppError::NotFound(id_str))?;
    json_ok(&user)
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let input = model::decode(&body?)?;
    let user: User = state.store.create(input).await?;
    tracing::info!(id = user.id, "user created");
    json_ok(&user)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let input = model::decode(&body?)?;
    let user = state
        .store
        .update(id, input)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    json_ok(&user)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(id_str));
    }
    tracing::info!(id, "user deleted");
    json_ok(DELETED_MESSAGE)
}

/// Known path, unsupported verb.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}
