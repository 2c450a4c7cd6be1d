//! User controller
//!
//! Translates HTTP semantics into calls on the injected [`UserService`],
//! converting between wire and domain users with [`UserDtoMapper`].

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, StatusCode},
    Json,
};

use crate::{
    constants::USERS_PATH,
    error::{AppError, AppResult},
    services::UserService,
};

use super::{mapper::UserDtoMapper, request::UserDto};

/// Response of a successful create: status, `Location` header and body
pub type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

/// Stateless handler for the user resource
#[derive(Clone)]
pub struct UserController {
    service: Arc<dyn UserService>,
    mapper: UserDtoMapper,
}

impl UserController {
    pub fn new(service: Arc<dyn UserService>, mapper: UserDtoMapper) -> Self {
        Self { service, mapper }
    }

    pub async fn get_all(&self) -> AppResult<Json<Vec<UserDto>>> {
        let users = self.service.get_all().await?;

        Ok(Json(
            users
                .into_iter()
                .map(|u| self.mapper.from_domain(u))
                .collect(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Json<UserDto>> {
        let user = self.service.get_by_id(id).await?;
        Ok(Json(self.mapper.from_domain(user)))
    }

    pub async fn filter(&self, login_name: &str) -> AppResult<Json<UserDto>> {
        let user = self.service.get_by_login_name(login_name).await?;
        Ok(Json(self.mapper.from_domain(user)))
    }

    pub async fn create(&self, dto: UserDto) -> AppResult<Created<UserDto>> {
        let created = self.upsert(dto).await?;
        let id = created.id.ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("user service returned a created user without id"))
        })?;

        Ok((
            StatusCode::CREATED,
            [(header::LOCATION, location(id))],
            Json(created),
        ))
    }

    pub async fn update(&self, id: i64, dto: UserDto) -> AppResult<Json<UserDto>> {
        if dto.id != Some(id) {
            return Err(AppError::InvalidInput(
                "User ID in path and body do not match".to_string(),
            ));
        }

        Ok(Json(self.upsert(dto).await?))
    }

    pub async fn delete(&self, id: i64) -> AppResult<StatusCode> {
        self.service.delete(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    async fn upsert(&self, dto: UserDto) -> AppResult<UserDto> {
        let user = self.service.upsert(self.mapper.to_domain(dto)).await?;
        Ok(self.mapper.from_domain(user))
    }
}

/// Path of a single user resource
fn location(id: i64) -> String {
    format!("{}/{}", USERS_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::User, services::MockUserService};
    use mockall::predicate::eq;

    fn controller(service: MockUserService) -> UserController {
        UserController::new(Arc::new(service), UserDtoMapper)
    }

    fn persisted(id: i64, login_name: &str) -> User {
        User {
            id: Some(id),
            ..User::new(login_name)
        }
    }

    fn dto(id: Option<i64>, login_name: &str) -> UserDto {
        UserDto {
            id,
            login_name: login_name.to_string(),
            email_address: None,
            first_name: None,
            last_name: None,
        }
    }

    #[tokio::test]
    async fn test_get_all_preserves_service_order() {
        let mut service = MockUserService::new();
        service
            .expect_get_all()
            .times(1)
            .returning(|| Ok(vec![persisted(2, "bob"), persisted(1, "alice")]));

        let Json(users) = controller(service).get_all().await.unwrap();
        assert_eq!(users, vec![dto(Some(2), "bob"), dto(Some(1), "alice")]);
    }

    #[tokio::test]
    async fn test_create_sets_location_header() {
        let mut service = MockUserService::new();
        service
            .expect_upsert()
            .with(eq(User::new("alice")))
            .times(1)
            .returning(|user| Ok(User { id: Some(1), ..user }));

        let (status, [(name, value)], Json(created)) =
            controller(service).create(dto(None, "alice")).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(name, header::LOCATION);
        assert_eq!(value, "/api/users/1");
        assert_eq!(created, dto(Some(1), "alice"));
    }

    #[tokio::test]
    async fn test_create_forwards_body_unchanged() {
        let mut service = MockUserService::new();
        service
            .expect_upsert()
            .with(eq(persisted(5, "alice")))
            .times(1)
            .returning(Ok);

        let (status, [(_, value)], Json(created)) =
            controller(service).create(dto(Some(5), "alice")).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(value, "/api/users/5");
        assert_eq!(created, dto(Some(5), "alice"));
    }

    #[tokio::test]
    async fn test_update_id_mismatch_never_reaches_service() {
        let mut service = MockUserService::new();
        service.expect_upsert().never();
        let controller = controller(service);

        let err = controller.update(1, dto(Some(2), "alice")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let err = controller.update(1, dto(None, "alice")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_update_passes_through_service_result() {
        let mut service = MockUserService::new();
        service
            .expect_upsert()
            .with(eq(persisted(3, "carol")))
            .times(1)
            .returning(Ok);

        let Json(updated) = controller(service).update(3, dto(Some(3), "carol")).await.unwrap();
        assert_eq!(updated, dto(Some(3), "carol"));
    }

    #[tokio::test]
    async fn test_service_errors_propagate_unchanged() {
        let mut service = MockUserService::new();
        service
            .expect_get_by_login_name()
            .returning(|name| Err(AppError::NotFound(format!("user with login name '{}'", name))));
        service
            .expect_upsert()
            .returning(|_| Err(AppError::Conflict("login name 'alice' already exists".to_string())));
        service
            .expect_delete()
            .with(eq(9))
            .returning(|_| Err(AppError::NotFound("user with id 9".to_string())));
        let controller = controller(service);

        assert!(matches!(controller.filter("nobody").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            controller.create(dto(None, "alice")).await,
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(controller.delete(9).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_returns_no_content() {
        let mut service = MockUserService::new();
        service.expect_delete().with(eq(4)).times(1).returning(|_| Ok(()));

        let status = controller(service).delete(4).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
