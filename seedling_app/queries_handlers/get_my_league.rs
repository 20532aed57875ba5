use async_trait::async_trait;
use std::sync::Arc;

use seedling_types::{errors::ApplicationError, league::LeagueStanding};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetMyLeague},
    ranking::{first_league_with_member, tally_members},
    uow::UnitOfWork,
};

pub struct GetMyLeagueHandler {}

impl GetMyLeagueHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetMyLeague> for GetMyLeagueHandler {
    async fn handle(
        &self,
        query: GetMyLeague,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<<GetMyLeague as Query>::Output, ApplicationError> {
        let caller_id = query.caller_id.as_str();
        tracing::info!("Getting league info for user: {}", caller_id);

        let repo = uow.leagues();
        let leagues = repo.list_leagues().await?;

        let found = first_league_with_member(
            repo.clone(),
            leagues,
            caller_id,
            config.league_probe_concurrency,
        )
        .await?;

        let Some(league) = found else {
            tracing::info!("User {} not found in any league", caller_id);
            return Ok(LeagueStanding::unmatched());
        };

        let members = repo.list_members_by_points(&league.id).await?;
        let tally = tally_members(caller_id, &members, config.rank_policy);

        tracing::info!(
            "User found in league {}, rank: {:?}, members: {}",
            league.id,
            tally.rank,
            tally.member_count
        );

        Ok(LeagueStanding::new(&league, tally.rank, tally.member_count))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use std::sync::Arc;
    use uuid::Uuid;

    use seedling_types::errors::DbError;

    use super::*;
    use crate::{
        config::RankPolicy,
        test_utils::tests::{InMemoryStore, MockUnitOfWork},
    };

    async fn standing(store: &InMemoryStore, config: Config, caller: &str) -> LeagueStanding {
        let config = Arc::new(config);
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> =
            Box::new(MockUnitOfWork::with_store(store.clone()));

        GetMyLeagueHandler::new()
            .handle(GetMyLeague::new(caller), &mock_uow, &config)
            .await
            .unwrap()
    }

    fn scenario_a() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.add_league("L", json!({ "name": "Bronze", "memberCount": 3 }));
        store.add_member("L", "U1", json!({ "point": 50, "displayName": "Alice" }));
        store.add_member("L", "U2", json!({ "point": 80, "displayName": "Bob" }));
        store.add_member("L", "U3", json!({ "point": 60, "displayName": "" }));
        store
    }

    #[tokio::test]
    async fn test_rank_excludes_invalid_members() {
        let store = scenario_a();

        let result = standing(&store, Config::new("secret"), "U2").await;
        assert_eq!(result.league_id.as_deref(), Some("L"));
        assert_eq!(result.rank, Some(1));
        assert_eq!(result.member_count, 2);

        let result = standing(&store, Config::new("secret"), "U1").await;
        assert_eq!(result.rank, Some(2));
        assert_eq!(result.member_count, 2);
    }

    #[tokio::test]
    async fn test_league_payload_carries_computed_member_count() {
        let store = scenario_a();

        let result = standing(&store, Config::new("secret"), "U2").await;
        let league = result.league.unwrap();
        assert_eq!(league.get("name"), Some(&json!("Bronze")));
        assert_eq!(league.get("memberCount"), Some(&json!(2)));
    }

    #[tokio::test]
    async fn test_not_in_any_league() {
        let store = scenario_a();
        store.add_league("M", json!({ "name": "Silver" }));

        let result = standing(&store, Config::new("secret"), &Uuid::new_v4().to_string()).await;
        assert_eq!(result, LeagueStanding::unmatched());
    }

    #[tokio::test]
    async fn test_no_leagues_at_all() {
        let store = InMemoryStore::new();

        let result = standing(&store, Config::new("secret"), "U1").await;
        assert_eq!(result, LeagueStanding::unmatched());
    }

    #[tokio::test]
    async fn test_invalid_caller_rank_depends_on_policy() {
        let store = scenario_a();

        let strict = standing(&store, Config::new("secret"), "U3").await;
        assert_eq!(strict.league_id.as_deref(), Some("L"));
        assert_eq!(strict.rank, None);
        assert_eq!(strict.member_count, 2);

        let legacy = standing(
            &store,
            Config::new("secret").with_rank_policy(RankPolicy::Legacy),
            "U3",
        )
        .await;
        assert_eq!(legacy.rank, Some(1));
        assert_eq!(legacy.member_count, 2);
    }

    #[tokio::test]
    async fn test_caller_without_points_is_not_listed() {
        let store = scenario_a();
        store.add_member("L", "U4", json!({ "displayName": "Dana" }));

        let result = standing(&store, Config::new("secret"), "U4").await;
        assert_eq!(result.league_id.as_deref(), Some("L"));
        assert_eq!(result.rank, None);
        assert_eq!(result.member_count, 2);
    }

    #[tokio::test]
    async fn test_null_point_member_still_counts() {
        let store = InMemoryStore::new();
        store.add_league("L", json!({ "name": "Bronze" }));
        store.add_member("L", "U1", json!({ "point": 50, "displayName": "Alice" }));
        store.add_member("L", "U2", json!({ "point": null, "displayName": "Eve" }));

        let alice = standing(&store, Config::new("secret"), "U1").await;
        assert_eq!(alice.rank, Some(1));
        assert_eq!(alice.member_count, 2);

        let eve = standing(&store, Config::new("secret"), "U2").await;
        assert_eq!(eve.rank, Some(2));
        assert_eq!(eve.member_count, 2);
    }

    #[tokio::test]
    async fn test_first_matching_league_wins() {
        let store = InMemoryStore::new();
        store.add_league("first", json!({ "name": "First" }));
        store.add_league("second", json!({ "name": "Second" }));
        store.add_member("first", "me", json!({ "point": 1, "displayName": "Me" }));
        store.add_member("first", "x", json!({ "point": 9, "displayName": "X" }));
        store.add_member("second", "me", json!({ "point": 100, "displayName": "Me" }));

        let sequential = standing(&store, Config::new("secret"), "me").await;
        let concurrent = standing(
            &store,
            Config::new("secret").with_league_probe_concurrency(8),
            "me",
        )
        .await;

        assert_eq!(sequential.league_id.as_deref(), Some("first"));
        assert_eq!(sequential.rank, Some(2));
        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let store = scenario_a();

        let first = standing(&store, Config::new("secret"), "U1").await;
        let second = standing(&store, Config::new("secret"), "U1").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_store_failure_aborts() {
        let store = scenario_a();
        store.fail_reads("deadline exceeded");

        let config = Arc::new(Config::new("secret"));
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> =
            Box::new(MockUnitOfWork::with_store(store.clone()));

        let result = GetMyLeagueHandler::new()
            .handle(GetMyLeague::new("U1"), &mock_uow, &config)
            .await;

        match result {
            Err(ApplicationError::Db(DbError::Unavailable(msg))) => {
                assert_eq!(msg, "deadline exceeded")
            }
            other => panic!("Expected store failure, got: {:?}", other),
        }
    }
}
