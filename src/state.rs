//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    config::Config,
    handlers::users::{UserController, UserDtoMapper},
    services::UserService,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Controller for the user resource
    users: UserController,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(users: UserController, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { users, config }),
        }
    }

    /// Wire a user controller around `service` with the default mapper
    pub fn with_service(service: Arc<dyn UserService>, config: Config) -> Self {
        Self::new(UserController::new(service, UserDtoMapper), config)
    }

    /// Get a reference to the user controller
    pub fn users(&self) -> &UserController {
        &self.inner.users
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
