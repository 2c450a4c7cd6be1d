//! User management handlers

mod controller;
mod handler;
pub mod mapper;
pub mod request;

pub use controller::{Created, UserController};
pub use handler::*;
pub use mapper::UserDtoMapper;
pub use request::*;

use axum::{routing::get, Router};

use crate::{constants::USERS_PATH, state::AppState};

/// User routes
///
/// | Method | Path                              |
/// |--------|-----------------------------------|
/// | GET    | `/api/users`                      |
/// | POST   | `/api/users`                      |
/// | GET    | `/api/users/filter?login_name=..` |
/// | GET    | `/api/users/{id}`                 |
/// | POST   | `/api/users/{id}`                 |
/// | DELETE | `/api/users/{id}`                 |
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(USERS_PATH, get(handler::list_users).post(handler::create_user))
        .route(&format!("{USERS_PATH}/filter"), get(handler::filter_users))
        .route(
            &format!("{USERS_PATH}/{{id}}"),
            get(handler::get_user)
                .post(handler::update_user)
                .delete(handler::delete_user),
        )
}
