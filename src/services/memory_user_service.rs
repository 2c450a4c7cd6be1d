//! In-memory user service

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::User,
};

use super::user_service::{login_name_not_found, user_not_found, UserService};

/// User service keeping all users in process memory.
///
/// Ids are assigned from 1 upwards and never reused.
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    inner: RwLock<Store>,
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

impl Store {
    /// Reject a login name or email address held by a user other than `id`
    fn check_unique(&self, user: &User, id: Option<i64>) -> AppResult<()> {
        for existing in self.users.values() {
            if existing.id == id {
                continue;
            }
            if existing.login_name == user.login_name {
                return Err(AppError::Conflict(format!(
                    "login name '{}' already exists",
                    user.login_name
                )));
            }
            if user.email_address.is_some() && existing.email_address == user.email_address {
                return Err(AppError::Conflict("email address already exists".to_string()));
            }
        }
        Ok(())
    }
}

impl InMemoryUserService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn get_all(&self) -> AppResult<Vec<User>> {
        let store = self.inner.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<User> {
        let store = self.inner.read().await;
        store.users.get(&id).cloned().ok_or_else(|| user_not_found(id))
    }

    async fn get_by_login_name(&self, login_name: &str) -> AppResult<User> {
        let store = self.inner.read().await;
        store
            .users
            .values()
            .find(|u| u.login_name == login_name)
            .cloned()
            .ok_or_else(|| login_name_not_found(login_name))
    }

    async fn upsert(&self, mut user: User) -> AppResult<User> {
        let mut store = self.inner.write().await;

        match user.id {
            None => {
                store.check_unique(&user, None)?;
                store.last_id += 1;
                let id = store.last_id;
                user.id = Some(id);
                store.users.insert(id, user.clone());
                tracing::info!(user_id = id, login_name = %user.login_name, "User created");
            }
            Some(id) => {
                if !store.users.contains_key(&id) {
                    return Err(user_not_found(id));
                }
                store.check_unique(&user, Some(id))?;
                store.users.insert(id, user.clone());
                tracing::info!(user_id = id, "User updated");
            }
        }

        Ok(user)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut store = self.inner.write().await;
        store.users.remove(&id).ok_or_else(|| user_not_found(id))?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
