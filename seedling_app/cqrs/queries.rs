use seedling_types::{
    common::Identity,
    learner::{Garden, Profile},
    league::LeagueStanding,
};

use crate::cqrs::{Query, Reply};

/// Locate the caller's league and their rank among its valid members.
pub struct GetMyLeague {
    pub caller_id: String,
}

impl GetMyLeague {
    pub fn new(caller_id: impl Into<String>) -> Self {
        Self {
            caller_id: caller_id.into(),
        }
    }
}

impl Query for GetMyLeague {
    type Output = LeagueStanding;
}

/// Profile of the caller, built from the identity alone.
pub struct GetMyProfile {
    pub caller: Identity,
}

impl Reply for GetMyProfile {
    type Output = Profile;
}

/// The caller's garden.
pub struct GetMyGarden {
    pub caller_id: String,
}

impl Reply for GetMyGarden {
    type Output = Garden;
}
