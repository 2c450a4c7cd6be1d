//! User service contract

use async_trait::async_trait;

use crate::{error::AppResult, models::User};

/// Domain operations on users.
///
/// Implementations own persistence and uniqueness rules. Lookups of missing
/// users fail with [`AppError::NotFound`](crate::error::AppError::NotFound);
/// a login name or email address already held by another user fails with
/// [`AppError::Conflict`](crate::error::AppError::Conflict).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// All users, ordered by id
    async fn get_all(&self) -> AppResult<Vec<User>>;

    async fn get_by_id(&self, id: i64) -> AppResult<User>;

    async fn get_by_login_name(&self, login_name: &str) -> AppResult<User>;

    /// Insert when `user.id` is `None`, otherwise replace the existing user
    async fn upsert(&self, user: User) -> AppResult<User>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub(crate) fn user_not_found(id: i64) -> crate::error::AppError {
    crate::error::AppError::NotFound(format!("user with id {}", id))
}

pub(crate) fn login_name_not_found(login_name: &str) -> crate::error::AppError {
    crate::error::AppError::NotFound(format!("user with login name '{}'", login_name))
}
