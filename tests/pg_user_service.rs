//! PgUserService against a throwaway Postgres container
//!
//! Needs a Docker daemon: `cargo test -- --ignored`

use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres;

use users_api::{
    db,
    models::User,
    services::{PgUserService, UserService},
    AppError,
};

#[tokio::test]
#[ignore = "requires Docker"]
async fn postgres_user_service_round_trip() {
    let container = Postgres::default()
        .start()
        .await
        .expect("Failed to start PostgreSQL container");
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let pool = sqlx::PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    db::run_migrations(&pool).await.expect("Failed to run migrations");
    let service = PgUserService::new(pool.clone());

    let alice = service
        .upsert(User::new("alice").with_email("alice@example.com"))
        .await
        .unwrap();
    let id = alice.id.expect("database assigns an id");
    assert_eq!(service.get_by_id(id).await.unwrap(), alice);
    assert_eq!(service.get_by_login_name("alice").await.unwrap(), alice);

    let duplicate = service.upsert(User::new("alice")).await.unwrap_err();
    assert!(matches!(duplicate, AppError::Conflict(_)));

    let mut renamed = alice.clone();
    renamed.first_name = Some("Alice".to_string());
    assert_eq!(service.upsert(renamed.clone()).await.unwrap(), renamed);

    let mut ghost = User::new("ghost");
    ghost.id = Some(id + 100);
    assert!(matches!(service.upsert(ghost).await, Err(AppError::NotFound(_))));

    assert_eq!(service.get_all().await.unwrap(), vec![renamed]);

    service.delete(id).await.unwrap();
    assert!(matches!(service.get_by_id(id).await, Err(AppError::NotFound(_))));
    assert!(matches!(service.delete(id).await, Err(AppError::NotFound(_))));
    assert!(service.get_all().await.unwrap().is_empty());
}
