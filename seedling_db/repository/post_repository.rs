use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use seedling_app::repository::PostRepository;
use seedling_types::{
    Result,
    errors::{ApplicationError, DbError},
};

use crate::mapping::POSTS_COLLECTION;

#[derive(Clone)]
pub struct PostgresPostRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPostRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> PostRepository for PostgresPostRepository<'a> {
    async fn list_ids(&self) -> Result<Vec<String>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query_scalar::<_, String>(
            r#"SELECT doc_id FROM documents WHERE collection = $1 ORDER BY doc_id"#,
        )
        .bind(POSTS_COLLECTION)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))
    }

    async fn delete_batch(&self, ids: &[String]) -> Result<u64, ApplicationError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut tx_guard = self.tx.lock().await;

        let result = sqlx::query(
            r#"DELETE FROM documents WHERE collection = $1 AND doc_id = ANY($2)"#,
        )
        .bind(POSTS_COLLECTION)
        .bind(ids)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(result.rows_affected())
    }
}
