//! Users API - REST service for user accounts
//!
//! This library exposes CRUD operations over a user resource at `/api/users`.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: route table, extractors and the [`UserController`](handlers::users::UserController)
//! - **Services**: the [`UserService`](services::UserService) contract and its
//!   Postgres and in-memory implementations
//! - **Repositories**: Database access
//! - **Models**: Domain models; wire DTOs live next to their handlers

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
