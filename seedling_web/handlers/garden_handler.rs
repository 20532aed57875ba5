use axum::extract::State;

use seedling_app::{cqrs::queries::GetMyGarden, queries_handlers::GetMyGardenHandler};
use seedling_types::learner::Garden;

use crate::{
    callable::{CallableError, CallableResponse, Operation},
    http::AppState,
    identity::Caller,
};

/// POST /getMyGarden
pub async fn get_my_garden(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<CallableResponse<Garden>, CallableError> {
    let op = Operation::GetMyGarden;
    let identity = caller.require().map_err(|e| op.fail(&caller, e))?;

    state
        .app_bus
        .reply(
            GetMyGarden {
                caller_id: identity.uid.clone(),
            },
            GetMyGardenHandler::new(),
        )
        .map(CallableResponse)
        .map_err(|e| op.fail(&caller, e))
}
