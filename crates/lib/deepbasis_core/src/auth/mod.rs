//! Authentication: password hashing, JWT codec and the register/login/refresh
//! flows built on top of the user manager.

pub mod jwt;
pub mod password;
pub mod service;

pub use jwt::{TokenClaims, TokenCodec};
pub use service::{AuthManager, LoginRequest, RefreshRequest, RegisterRequest, TokenPair};
