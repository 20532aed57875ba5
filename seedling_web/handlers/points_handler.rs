use axum::{body::Bytes, extract::State};

use seedling_app::{command_handlers::AddPointsCommandHandler, cqrs::commands::AddPoints};
use seedling_types::learner::PointsAward;

use crate::{
    callable::{CallableError, CallableResponse, Operation, request_data},
    http::AppState,
    identity::Caller,
};

/// POST /addPoints - `{"data": {"amount": <positive number>}}`
pub async fn add_points(
    State(state): State<AppState>,
    caller: Caller,
    body: Bytes,
) -> Result<CallableResponse<PointsAward>, CallableError> {
    let op = Operation::AddPoints;
    let identity = caller.require().map_err(|e| op.fail(&caller, e))?;

    let command = request_data(&body)
        .and_then(|data| AddPoints::new(identity.uid.clone(), &data))
        .map_err(|e| op.fail(&caller, e))?;

    state
        .app_bus
        .reply(command, AddPointsCommandHandler::new())
        .map(CallableResponse)
        .map_err(|e| op.fail(&caller, e))
}
