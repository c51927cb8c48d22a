//! Auth manager — register, login and token refresh flows.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::jwt::TokenCodec;
use super::password::verify_password;
use crate::error::{Error, Result};
use crate::user::model::{CreateUser, User};
use crate::user::service::UserManager;

/// Access token lifetime: 15 minutes.
const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Refresh token lifetime: 7 days.
const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Uniform message for both unknown email and wrong password, so a caller
/// cannot probe which factor failed.
const INVALID_CREDENTIALS: &str = "Invalid email or password.";

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// A freshly issued access/refresh token pair. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Orchestrates registration, login and refresh over the user manager.
///
/// Tokens are stateless: a refresh reissues both tokens but cannot revoke
/// the old refresh token, which stays valid until its natural expiry.
#[derive(Clone)]
pub struct AuthManager {
    users: UserManager,
    codec: TokenCodec,
}

impl AuthManager {
    pub fn new(users: UserManager, codec: TokenCodec) -> Self {
        Self { users, codec }
    }

    /// Register a new account and issue its first token pair.
    ///
    /// A duplicate email propagates unchanged from the user manager.
    pub async fn register(&self, dto: RegisterRequest) -> Result<TokenPair> {
        let user = self
            .users
            .create_user(CreateUser {
                name: dto.name,
                email: dto.email,
                password: dto.password,
            })
            .await?;
        info!(user_id = %user.id, "user registered");
        self.generate_tokens(&user)
    }

    /// Authenticate with email and password.
    pub async fn login(&self, dto: LoginRequest) -> Result<TokenPair> {
        let Some(user) = self.users.find_user_by_email(&dto.email).await? else {
            warn!("login failure");
            return Err(Error::Validation(INVALID_CREDENTIALS.into()));
        };

        if !verify_password(&dto.password, &user.password_hash) {
            warn!("login failure");
            return Err(Error::Validation(INVALID_CREDENTIALS.into()));
        }

        info!(user_id = %user.id, "user logged in");
        self.generate_tokens(&user)
    }

    /// Exchange a refresh token for a new token pair.
    pub async fn refresh_token(&self, dto: RefreshRequest) -> Result<TokenPair> {
        let Some(claims) = self.codec.verify(&dto.refresh_token) else {
            warn!("refresh with invalid token");
            return Err(Error::Validation("Invalid refresh token.".into()));
        };

        let Some(user) = self.users.get_user_by_id(claims.user_id).await? else {
            return Err(Error::Validation("User not found.".into()));
        };

        self.generate_tokens(&user)
    }

    fn generate_tokens(&self, user: &User) -> Result<TokenPair> {
        Ok(TokenPair {
            access_token: self
                .codec
                .issue(user.id, Duration::seconds(ACCESS_TOKEN_TTL_SECS))?,
            refresh_token: self
                .codec
                .issue(user.id, Duration::seconds(REFRESH_TOKEN_TTL_SECS))?,
        })
    }
}
