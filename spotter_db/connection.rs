use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;

use spotter_core::DbError;

pub type DbPool = PgPool;

/// Pool for the database at `DATABASE_URL`.
pub async fn establish_connection_pool() -> Result<DbPool, DbError> {
    init_connection_pool("DATABASE_URL").await
}

/// Pool for the database at `TEST_DATABASE_URL`.
pub async fn establish_test_connection_pool() -> Result<DbPool, DbError> {
    init_connection_pool("TEST_DATABASE_URL").await
}

async fn init_connection_pool(database_env: &'static str) -> Result<DbPool, DbError> {
    dotenvy::dotenv().ok();

    let database_url = env::var(database_env).map_err(|_| {
        DbError::Database(sqlx::Error::Configuration(
            format!("{database_env} must be set").into(),
        ))
    })?;

    Ok(PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?)
}
