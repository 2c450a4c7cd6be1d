//! Postgres-backed user service

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::repositories::UserRepository,
    error::AppResult,
    models::User,
};

use super::user_service::{login_name_not_found, user_not_found, UserService};

/// User service persisting to the `users` table.
///
/// Uniqueness of login names and email addresses is enforced by database
/// constraints; violations surface as conflicts through `From<sqlx::Error>`.
#[derive(Clone)]
pub struct PgUserService {
    pool: PgPool,
}

impl PgUserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserService for PgUserService {
    async fn get_all(&self) -> AppResult<Vec<User>> {
        let records = UserRepository::list(&self.pool).await?;
        Ok(records.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<User> {
        UserRepository::find_by_id(&self.pool, id)
            .await?
            .map(User::from)
            .ok_or_else(|| user_not_found(id))
    }

    async fn get_by_login_name(&self, login_name: &str) -> AppResult<User> {
        UserRepository::find_by_login_name(&self.pool, login_name)
            .await?
            .map(User::from)
            .ok_or_else(|| login_name_not_found(login_name))
    }

    async fn upsert(&self, user: User) -> AppResult<User> {
        match user.id {
            None => {
                let record = UserRepository::create(&self.pool, &user).await?;
                tracing::info!(user_id = record.id, login_name = %record.login_name, "User created");
                Ok(record.into())
            }
            Some(id) => {
                let record = UserRepository::update(&self.pool, id, &user)
                    .await?
                    .ok_or_else(|| user_not_found(id))?;
                tracing::info!(user_id = id, "User updated");
                Ok(record.into())
            }
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if !UserRepository::delete(&self.pool, id).await? {
            return Err(user_not_found(id));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
