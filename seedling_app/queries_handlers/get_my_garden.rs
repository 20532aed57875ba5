use seedling_types::{errors::ApplicationError, learner::Garden};

use crate::{
    config::Config,
    cqrs::{Reply, ReplyHandler, queries::GetMyGarden},
};

const GARDEN_SIZE: u8 = 3;
const GARDEN_STARTING_POINTS: u32 = 100;

/// Serves the starter garden. Persisted gardens are not read yet.
pub struct GetMyGardenHandler {}

impl GetMyGardenHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl ReplyHandler<GetMyGarden> for GetMyGardenHandler {
    fn handle(
        &self,
        query: GetMyGarden,
        _config: &Config,
    ) -> Result<<GetMyGarden as Reply>::Output, ApplicationError> {
        tracing::info!("Getting garden for user: {}", query.caller_id);
        Ok(Garden::empty(GARDEN_SIZE, GARDEN_STARTING_POINTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garden_is_empty_three_by_three() {
        let garden = GetMyGardenHandler::new()
            .handle(
                GetMyGarden {
                    caller_id: "u1".to_string(),
                },
                &Config::new("secret"),
            )
            .unwrap();

        assert_eq!(garden.size, 3);
        assert_eq!(garden.point, 100);
        assert_eq!(garden.tiles.len(), 9);
        assert!(garden.tiles.values().all(|tile| tile.stage == 0));
    }
}
