use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use userdeck_application::{StoreBackedUserService, UserService};
use userdeck_domain::{User, UserError};

use super::PostgresUserStore;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connects to `DATABASE_URL` if set; tests are skipped otherwise.
async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres user store tests: {error}");
    }

    Some(pool)
}

fn unique_user(name: &str) -> User {
    let now = Utc::now();
    let id = format!("u-{}", now.timestamp_nanos_opt().unwrap_or_default());
    User {
        email: format!("{id}@example.com"),
        id,
        name: name.to_owned(),
        email_verified: false,
        image: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn create_get_delete_roundtrip_against_postgres() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let service = StoreBackedUserService::new(Arc::new(PostgresUserStore::new(pool)));

    let input = unique_user("Ann");
    let created = match service.create_user(input.clone()).await {
        Ok(user) => user,
        Err(error) => panic!("create_user failed: {error}"),
    };
    assert_eq!(created.id, input.id);
    assert_eq!(created.email, input.email);

    let fetched = match service.get_user(input.id.as_str()).await {
        Ok(user) => user,
        Err(error) => panic!("get_user failed: {error}"),
    };
    assert_eq!(fetched.id, input.id);
    assert_eq!(fetched.name, "Ann");

    if let Err(error) = service.delete_user(input.id.as_str()).await {
        panic!("delete_user failed: {error}");
    }

    match service.get_user(input.id.as_str()).await {
        Err(UserError::NotFound { user_id }) => assert_eq!(user_id, input.id),
        Err(error) => panic!("expected NotFound, got: {error}"),
        Ok(user) => panic!("expected NotFound, got user {}", user.id),
    }
}

#[tokio::test]
async fn get_of_missing_id_reports_not_found() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let service = StoreBackedUserService::new(Arc::new(PostgresUserStore::new(pool)));

    match service.get_user("no-such-user").await {
        Err(UserError::NotFound { user_id }) => assert_eq!(user_id, "no-such-user"),
        Err(error) => panic!("expected NotFound, got: {error}"),
        Ok(user) => panic!("expected NotFound, got user {}", user.id),
    }
}

#[tokio::test]
async fn delete_of_missing_id_succeeds() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let service = StoreBackedUserService::new(Arc::new(PostgresUserStore::new(pool)));

    assert!(service.delete_user("no-such-user").await.is_ok());
}

#[tokio::test]
async fn duplicate_insert_surfaces_as_datastore_error() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let service = StoreBackedUserService::new(Arc::new(PostgresUserStore::new(pool)));

    let input = unique_user("Ann");
    if let Err(error) = service.create_user(input.clone()).await {
        panic!("create_user failed: {error}");
    }

    match service.create_user(input.clone()).await {
        Err(UserError::Datastore(message)) => assert!(message.contains("failed to insert user")),
        Err(error) => panic!("expected Datastore, got: {error}"),
        Ok(user) => panic!("expected Datastore, got user {}", user.id),
    }

    if let Err(error) = service.delete_user(input.id.as_str()).await {
        panic!("cleanup delete failed: {error}");
    }
}
