use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use seedling_app::repository::LeagueRepository;
use seedling_types::{
    Result,
    errors::{ApplicationError, DbError},
    league::{League, Member},
};

use crate::mapping::{DocumentRow, LEAGUES_COLLECTION, members_collection};

/// Implements LeagueRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresLeagueRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresLeagueRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> LeagueRepository for PostgresLeagueRepository<'a> {
    async fn list_leagues(&self) -> Result<Vec<League>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"SELECT doc_id, data FROM documents WHERE collection = $1 ORDER BY doc_id"#,
        )
        .bind(LEAGUES_COLLECTION)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(League::from).collect())
    }

    async fn member_exists(&self, league_id: &str, user_id: &str) -> Result<bool, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS (SELECT 1 FROM documents WHERE collection = $1 AND doc_id = $2)"#,
        )
        .bind(members_collection(league_id))
        .bind(user_id)
        .fetch_one(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))
    }

    async fn list_members_by_points(
        &self,
        league_id: &str,
    ) -> Result<Vec<Member>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        // Only documents without a `point` field are left out. Mixed types
        // order by type first, matching `compare_points`.
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
              SELECT doc_id, data
              FROM documents
              WHERE collection = $1
                AND data ? 'point'
              ORDER BY
                CASE jsonb_typeof(data->'point')
                  WHEN 'object' THEN 5
                  WHEN 'array' THEN 4
                  WHEN 'string' THEN 3
                  WHEN 'number' THEN 2
                  WHEN 'boolean' THEN 1
                  ELSE 0
                END DESC,
                data->'point' DESC,
                doc_id ASC
              "#,
        )
        .bind(members_collection(league_id))
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Member::from).collect())
    }
}
