//! # deepbasis_api
//!
//! HTTP API library for DeepBasis.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use deepbasis_core::auth::{AuthManager, TokenCodec};
use deepbasis_core::user::{UserManager, UserStore};

use crate::config::ApiConfig;
use crate::handlers::{auth, health, users};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Auth flows (register, login, refresh).
    pub auth: AuthManager,
    /// User business rules.
    pub users: UserManager,
    /// Store handle, kept for the health check.
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    /// Composition root: wires a fresh set of components over `store`.
    ///
    /// Tests call this with a [`MemoryUserStore`](deepbasis_core::user::MemoryUserStore)
    /// so no state is shared across test cases.
    pub fn new(store: Arc<dyn UserStore>, config: &ApiConfig) -> Self {
        let users = UserManager::new(store.clone(), config.bcrypt_cost);
        let codec = TokenCodec::new(config.jwt_secret.as_bytes());
        let auth = AuthManager::new(users.clone(), codec);
        Self { auth, users, store }
    }
}

/// Run embedded database migrations.
///
/// Delegates to `deepbasis_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    deepbasis_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/auth/register", post(auth::register_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/refresh-token", post(auth::refresh_handler))
        .route(
            "/users",
            get(users::list_users_handler).post(users::create_user_handler),
        )
        .route(
            "/users/{id}",
            get(users::get_user_handler)
                .put(users::update_user_handler)
                .delete(users::delete_user_handler),
        )
        .layer(cors)
        .with_state(state)
}
