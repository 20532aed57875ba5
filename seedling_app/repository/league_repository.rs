use seedling_types::{
    errors::ApplicationError,
    league::{League, Member},
};

/// Read access to `leagues/{leagueId}` and its `members` sub-collection.
#[async_trait::async_trait]
pub trait LeagueRepository: Send + Sync {
    /// Returns every league, in store enumeration order.
    async fn list_leagues(&self) -> Result<Vec<League>, ApplicationError>;

    /// Whether a member document keyed by `user_id` exists in the league.
    async fn member_exists(&self, league_id: &str, user_id: &str)
    -> Result<bool, ApplicationError>;

    /// Returns the league members ordered by `point` descending.
    /// Members without a numeric `point` are not listed. Ties keep store order.
    async fn list_members_by_points(
        &self,
        league_id: &str,
    ) -> Result<Vec<Member>, ApplicationError>;
}
