use seedling_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns the ids of every document in `posts`.
    async fn list_ids(&self) -> Result<Vec<String>, ApplicationError>;

    /// Deletes the given posts as one batch. Takes effect when the unit of work commits.
    async fn delete_batch(&self, ids: &[String]) -> Result<u64, ApplicationError>;
}
