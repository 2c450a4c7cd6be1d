//! User repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::{error::AppResult, models::User};

/// Row of the `users` table
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub login_name: String,
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: Some(record.id),
            login_name: record.login_name,
            email_address: record.email_address,
            first_name: record.first_name,
            last_name: record.last_name,
        }
    }
}

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user, letting the database assign the id
    pub async fn create(pool: &PgPool, user: &User) -> AppResult<UserRecord> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (login_name, email_address, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&user.login_name)
        .bind(&user.email_address)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// Find user by login name
    pub async fn find_by_login_name(pool: &PgPool, login_name: &str) -> AppResult<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(r#"SELECT * FROM users WHERE login_name = $1"#)
            .bind(login_name)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// Replace all user attributes; `None` when no row has this id
    pub async fn update(pool: &PgPool, id: i64, user: &User) -> AppResult<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET
                login_name = $2,
                email_address = $3,
                first_name = $4,
                last_name = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&user.login_name)
        .bind(&user.email_address)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete user, returning whether a row was removed
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List all users ordered by id
    pub async fn list(pool: &PgPool) -> AppResult<Vec<UserRecord>> {
        let records = sqlx::query_as::<_, UserRecord>(r#"SELECT * FROM users ORDER BY id ASC"#)
            .fetch_all(pool)
            .await?;

        Ok(records)
    }
}
