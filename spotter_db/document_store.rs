use serde_json::Value;
use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use spotter_app::repository::{DocumentStore, WriteBatch};
use spotter_core::{ApplicationError, DbError};
use spotter_domain::Collection;

const UPSERT_DOCUMENT: &str = r#"
    INSERT INTO documents (collection, id, data)
    VALUES ($1, $2, $3)
    ON CONFLICT (collection, id) DO UPDATE
    SET
        data = EXCLUDED.data,
        updated_at = now()
"#;

/// `DocumentStore` backed by the `documents` table: one JSONB row per
/// (collection, id).
#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Value>, ApplicationError> {
        let row: Option<(Json<Value>,)> = sqlx::query_as(
            r#"
            SELECT data
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(row.map(|(Json(data),)| data))
    }

    async fn put(&self, collection: Collection, id: Uuid, data: Value) -> Result<(), ApplicationError> {
        sqlx::query(UPSERT_DOCUMENT)
            .bind(collection.as_str())
            .bind(id)
            .bind(Json(data))
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, ApplicationError> {
        let rows: Vec<(Json<Value>,)> = sqlx::query_as(
            r#"
            SELECT data
            FROM documents
            WHERE collection = $1 AND data -> $2 = $3
            ORDER BY created_at
            "#,
        )
        .bind(collection.as_str())
        .bind(field)
        .bind(Json(value))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(|(Json(data),)| data).collect())
    }

    /// Every put and delete runs in one transaction: either the whole batch
    /// lands or none of it does.
    async fn batch_write(&self, batch: WriteBatch) -> Result<(), ApplicationError> {
        let collections: Vec<&str> = batch.collections().iter().map(|c| c.as_str()).collect();
        let size = batch.len();
        let (puts, deletes) = batch.into_parts();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApplicationError::Db(DbError::Transaction(e.to_string())))?;

        for write in puts {
            sqlx::query(UPSERT_DOCUMENT)
                .bind(write.key.collection.as_str())
                .bind(write.key.id)
                .bind(Json(write.data))
                .execute(&mut *tx)
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        }

        for key in deletes {
            sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
                .bind(key.collection.as_str())
                .bind(key.id)
                .execute(&mut *tx)
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| ApplicationError::Db(DbError::Transaction(e.to_string())))?;

        tracing::debug!(size, ?collections, "Batch write committed.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use spotter_app::repository::Repository;
    use spotter_domain::{
        models::{received_workout::ReceivedWorkout, user::User, workout::Workout},
        test_utils::{
            ReceivedWorkoutFactoryOptions, UserFactoryOptions, WorkoutFactoryOptions,
            received_workout_factory, user_factory, workout_factory,
        },
    };
    use std::sync::Arc;

    use super::*;
    use crate::establish_test_connection_pool;

    async fn setup_repository() -> Repository {
        let pool = establish_test_connection_pool().await.unwrap();
        sqlx::migrate!("../migrations").run(&pool).await.unwrap();
        Repository::new(Arc::new(PostgresDocumentStore::new(pool)))
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_put_get_and_find_by_owner() {
        let repo = setup_repository().await;
        let workout = workout_factory(WorkoutFactoryOptions::default());

        assert!(repo.get::<Workout>(workout.id).await.unwrap().is_none());

        repo.put(&workout).await.unwrap();
        let stored = repo.get::<Workout>(workout.id).await.unwrap().unwrap();
        assert_eq!(stored, workout);

        let owned = repo
            .find_by::<Workout>("owner_id", workout.owner_id)
            .await
            .unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].id, workout.id);
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_batch_write_applies_puts_and_deletes() {
        let repo = setup_repository().await;
        let user = user_factory(UserFactoryOptions::default());
        let received = received_workout_factory(ReceivedWorkoutFactoryOptions {
            recipient_id: Some(user.id),
            ..Default::default()
        });
        repo.put(&received).await.unwrap();

        let mut batch = WriteBatch::new();
        batch.put(&user).unwrap().delete::<ReceivedWorkout>(received.id);
        repo.batch_write(batch).await.unwrap();

        assert!(repo.get::<User>(user.id).await.unwrap().is_some());
        assert!(
            repo.get::<ReceivedWorkout>(received.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_put_and_batch_write_overwrite_existing_documents() {
        let repo = setup_repository().await;
        let mut workout = workout_factory(WorkoutFactoryOptions::default());
        repo.put(&workout).await.unwrap();

        workout.name = "Pull day".to_string();
        repo.put(&workout).await.unwrap();
        let stored = repo.get::<Workout>(workout.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Pull day");

        workout.name = "Leg day".to_string();
        let mut batch = WriteBatch::new();
        batch.put(&workout).unwrap();
        repo.batch_write(batch).await.unwrap();
        let stored = repo.get::<Workout>(workout.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Leg day");
    }
}
