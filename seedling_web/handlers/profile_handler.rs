use axum::extract::State;

use seedling_app::{cqrs::queries::GetMyProfile, queries_handlers::GetMyProfileHandler};
use seedling_types::learner::Profile;

use crate::{
    callable::{CallableError, CallableResponse, Operation},
    http::AppState,
    identity::Caller,
};

/// POST /getMyProfile
pub async fn get_my_profile(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<CallableResponse<Profile>, CallableError> {
    let op = Operation::GetMyProfile;
    let identity = caller.require().map_err(|e| op.fail(&caller, e))?;

    state
        .app_bus
        .reply(
            GetMyProfile {
                caller: identity.clone(),
            },
            GetMyProfileHandler::new(),
        )
        .map(CallableResponse)
        .map_err(|e| op.fail(&caller, e))
}
