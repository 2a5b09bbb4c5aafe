//! Handlers for user CRUD endpoints.
//!
//! Handlers never build error bodies themselves; every [`AppError`] propagates
//! to the error translator middleware.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::user::{CreateUserRequest, UserView};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserView>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserView::from).collect()))
}

/// Retrieves a single user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if no user has the given id.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserView>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserView::from(user)))
}

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /users`
///
/// Answers 200 with a plain text confirmation, not a JSON body.
///
/// # Errors
///
/// Returns 409 if the email is already registered.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<&'static str, AppError> {
    state.user_service.create_user(payload.into()).await?;

    Ok("User created successfully!")
}

/// Replaces a user's profile in full.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// Full-replace, not merge-patch: fields absent from the payload overwrite
/// stored values with their empty/absent decodings.
///
/// # Errors
///
/// Returns 404 if no user has the given id.
/// Returns 409 if the new email belongs to another user.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserView>, AppError> {
    let user = state.user_service.update_user(id, payload.into()).await?;

    Ok(Json(UserView::from(user)))
}

/// Removes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// Answers 200 with a plain text confirmation.
///
/// # Errors
///
/// Returns 404 if no user has the given id.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<&'static str, AppError> {
    state.user_service.delete_user(id).await?;

    Ok("User deleted successfully!")
}
