use axum::{extract::State, http::StatusCode, Json};

use crate::api::errors::ApiError;
use crate::api::extractors::{JsonPayload, UserId};
use crate::api::state::AppState;
use crate::domain::user::{User, UserPayload};

const USER_NOT_FOUND: &str = "User not found";

/// List all users
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "failed to list users");
        ApiError::internal_server_error("Failed to fetch users")
    })?;

    Ok(Json(users))
}

/// Get a user by ID
///
/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = id, "failed to fetch user");
            ApiError::internal_server_error("Error fetching user")
        })?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(user))
}

/// Create a new user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users.create(payload).await.map_err(|e| {
        tracing::error!(error = %e, "failed to create user");
        ApiError::internal_server_error("Error creating user")
    })?;

    tracing::info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user's name and email
///
/// PUT /users/:id
///
/// The ID in the response always comes from the path.
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonPayload(payload): JsonPayload<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .update(id, payload)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = id, "failed to update user");
            ApiError::internal_server_error("Error updating user")
        })?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(user))
}

/// Delete a user
///
/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<StatusCode, ApiError> {
    let deleted = state.users.delete(id).await.map_err(|e| {
        tracing::error!(error = %e, user_id = id, "failed to delete user");
        ApiError::internal_server_error("Error deleting user")
    })?;

    if !deleted {
        return Err(ApiError::not_found(USER_NOT_FOUND));
    }

    tracing::info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
