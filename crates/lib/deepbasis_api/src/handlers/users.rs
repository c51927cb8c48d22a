//! User CRUD request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use deepbasis_core::user::{CreateUser, UpdateUser, User};

use crate::AppState;
use crate::error::{AppError, AppResult};

/// `GET /users` — list all users.
pub async fn list_users_handler(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}

/// `POST /users` — create a user.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.users.create_user(body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /users/{id}` — fetch a user by id.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<User>> {
    let user = state
        .users
        .get_user_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(user))
}

/// `PUT /users/{id}` — partial update.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = state.users.update_user(id, body).await?;
    Ok(Json(user))
}

/// `DELETE /users/{id}` — delete a user.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
