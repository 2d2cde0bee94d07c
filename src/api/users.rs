//! User endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserExists},
    AppState,
};

/// Get a user by email
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = "users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.services.users.get_by_email(&email).await?;
    Ok(Json(user))
}

/// Check whether a user is registered under an email
#[utoipa::path(
    get,
    path = "/users/{email}/exists",
    tag = "users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "Existence flag", body = UserExists)
    )
)]
pub async fn user_exists(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<UserExists>> {
    let exists = state.services.users.exists(&email).await?;
    Ok(Json(UserExists { email, exists }))
}

/// Register a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> AppResult<(StatusCode, Json<User>)> {
    user.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.users.create(&user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
