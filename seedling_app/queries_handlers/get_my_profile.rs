use seedling_types::{errors::ApplicationError, learner::Profile};

use crate::{
    config::Config,
    cqrs::{Reply, ReplyHandler, queries::GetMyProfile},
};

const DEFAULT_DISPLAY_NAME: &str = "User";

pub struct GetMyProfileHandler {}

impl GetMyProfileHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl ReplyHandler<GetMyProfile> for GetMyProfileHandler {
    fn handle(
        &self,
        query: GetMyProfile,
        _config: &Config,
    ) -> Result<<GetMyProfile as Reply>::Output, ApplicationError> {
        let caller = query.caller;
        let display_name = caller
            .display_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

        Ok(Profile::new(
            caller.uid,
            display_name,
            caller.email.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use seedling_types::common::Identity;

    use super::*;

    #[test]
    fn test_profile_echoes_identity() {
        let config = Config::new("secret");
        let caller = Identity::new("u1")
            .with_display_name("Alice")
            .with_email("alice@example.com");

        let profile = GetMyProfileHandler::new()
            .handle(GetMyProfile { caller }, &config)
            .unwrap();

        assert_eq!(profile.uid, "u1");
        assert_eq!(profile.display_name, "Alice");
        assert_eq!(profile.email, "alice@example.com");
        assert_eq!(profile.total_points, 0);
        assert_eq!(profile.edu_points, 0);
        assert_eq!(profile.job_points, 0);
        assert_eq!(profile.completed_lessons, 0);
    }

    #[test]
    fn test_profile_defaults_missing_claims() {
        let config = Config::new("secret");

        let profile = GetMyProfileHandler::new()
            .handle(
                GetMyProfile {
                    caller: Identity::new("u1").with_display_name(""),
                },
                &config,
            )
            .unwrap();

        assert_eq!(profile.display_name, "User");
        assert_eq!(profile.email, "");
    }
}
