use std::sync::Arc;

use seedling_types::{errors::ApplicationError, learner::DeletionSummary};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeleteAllPosts},
    uow::UnitOfWork,
};

/// Removes every post in a single batch. Any authenticated caller may run it.
pub struct DeleteAllPostsCommandHandler {}

impl DeleteAllPostsCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteAllPosts> for DeleteAllPostsCommandHandler {
    async fn handle(
        &self,
        command: DeleteAllPosts,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<DeletionSummary, ApplicationError> {
        tracing::info!(
            "Deleting all posts requested by user: {}",
            command.requested_by
        );

        let repo = uow.posts();
        let ids = repo.list_ids().await?;
        let deleted = repo.delete_batch(&ids).await?;

        tracing::info!("Deleted {} posts", deleted);
        Ok(DeletionSummary::new(deleted))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_utils::tests::{InMemoryStore, MockUnitOfWork};

    #[tokio::test]
    async fn test_deletes_are_staged_until_commit() {
        let config = Arc::new(Config::new("secret"));
        let store = InMemoryStore::new();
        for i in 0..3 {
            store.add_post(&format!("p{i}"), json!({ "body": i }));
        }
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> =
            Box::new(MockUnitOfWork::with_store(store.clone()));

        let summary = DeleteAllPostsCommandHandler::new()
            .handle(DeleteAllPosts::new("u1"), &mock_uow, &config)
            .await
            .unwrap();

        assert_eq!(summary.deleted_count, 3);
        assert_eq!(summary.message, "Deleted 3 posts successfully");
        assert_eq!(store.post_count(), 3);

        mock_uow.commit().await.unwrap();
        assert_eq!(store.post_count(), 0);
    }

    #[tokio::test]
    async fn test_rollback_keeps_posts() {
        let config = Arc::new(Config::new("secret"));
        let store = InMemoryStore::new();
        store.add_post("p1", json!({}));
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> =
            Box::new(MockUnitOfWork::with_store(store.clone()));

        DeleteAllPostsCommandHandler::new()
            .handle(DeleteAllPosts::new("u1"), &mock_uow, &config)
            .await
            .unwrap();
        mock_uow.rollback().await.unwrap();

        assert_eq!(store.post_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let config = Arc::new(Config::new("secret"));
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());

        let summary = DeleteAllPostsCommandHandler::new()
            .handle(DeleteAllPosts::new("u1"), &mock_uow, &config)
            .await
            .unwrap();

        assert!(summary.success);
        assert_eq!(summary.deleted_count, 0);
        mock_uow.commit().await.unwrap();
    }
}
