//! Business logic services

pub mod memory_user_service;
pub mod pg_user_service;
pub mod user_service;

pub use memory_user_service::InMemoryUserService;
pub use pg_user_service::PgUserService;
pub use user_service::UserService;

#[cfg(test)]
pub use user_service::MockUserService;
