//! API server configuration.

use deepbasis_core::auth::password::DEFAULT_BCRYPT_COST;
use tracing::warn;

/// Development fallback secret; real deployments must set `JWT_SECRET`.
const DEV_JWT_SECRET: &str = "your-secret-key";

/// Configuration consumed by the auth and user layers.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// JWT signing secret.
    pub jwt_secret: String,
    /// bcrypt work factor for password hashing.
    pub bcrypt_cost: u32,
}

impl ApiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable      | Default                         |
    /// |---------------|---------------------------------|
    /// | `JWT_SECRET`  | dev fallback (logged as a warn) |
    /// | `BCRYPT_COST` | `10`                            |
    pub fn from_env() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("JWT_SECRET not set, using development fallback secret");
                DEV_JWT_SECRET.into()
            }
        };
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BCRYPT_COST);
        Self {
            jwt_secret,
            bcrypt_cost,
        }
    }
}
