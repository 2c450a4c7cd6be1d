//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod user_repo;

pub use user_repo::{UserRecord, UserRepository};
