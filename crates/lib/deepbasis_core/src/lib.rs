//! # deepbasis_core
//!
//! Core domain logic for DeepBasis: credential hashing, token issuance,
//! user persistence and the auth/user orchestration layers.

pub mod auth;
pub mod error;
pub mod migrate;
pub mod user;

pub use error::{Error, Result};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
