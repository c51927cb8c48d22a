//! User persistence and business rules.

pub mod memory;
pub mod model;
pub mod postgres;
pub mod service;
pub mod store;

pub use memory::MemoryUserStore;
pub use model::{CreateUser, UpdateUser, User};
pub use postgres::PgUserStore;
pub use service::UserManager;
pub use store::{NewUser, UserPatch, UserStore};
