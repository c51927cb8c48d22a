//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use deepbasis_core::auth::{LoginRequest, RefreshRequest, RegisterRequest, TokenPair};

use crate::AppState;
use crate::error::AppResult;

/// `POST /auth/register` — create a new account and issue a token pair.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<TokenPair>)> {
    let tokens = state.auth.register(body).await?;
    Ok((StatusCode::CREATED, Json(tokens)))
}

/// `POST /auth/login` — authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<TokenPair>> {
    let tokens = state.auth.login(body).await?;
    Ok(Json(tokens))
}

/// `POST /auth/refresh-token` — exchange a refresh token for a new pair.
pub async fn refresh_handler(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> AppResult<Json<TokenPair>> {
    let tokens = state.auth.refresh_token(body).await?;
    Ok(Json(tokens))
}
