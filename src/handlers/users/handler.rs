//! User handler implementations
//!
//! Thin adapters from axum extractors to [`UserController`](super::UserController).

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, handlers::extract::ValidatedJson, state::AppState};

use super::{
    controller::Created,
    request::{FilterUsersQuery, UserDto},
};

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserDto>>> {
    state.users().get_all().await
}

/// Get a specific user by ID
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<UserDto>> {
    let Path(id) = path?;
    state.users().get_by_id(id).await
}

/// Look a user up by login name
pub async fn filter_users(
    State(state): State<AppState>,
    query: Result<Query<FilterUsersQuery>, QueryRejection>,
) -> AppResult<Json<UserDto>> {
    let Query(query) = query?;
    tracing::debug!(login_name = %query.login_name, "Filtering users by login name");
    state.users().filter(&query.login_name).await
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> AppResult<Created<UserDto>> {
    state.users().create(payload).await
}

/// Replace an existing user
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> AppResult<Json<UserDto>> {
    let Path(id) = path?;
    state.users().update(id, payload).await
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    state.users().delete(id).await
}
