use axum::extract::State;

use seedling_app::{cqrs::queries::GetMyLeague, queries_handlers::GetMyLeagueHandler};
use seedling_types::league::LeagueStanding;

use crate::{
    callable::{CallableError, CallableResponse, Operation},
    http::AppState,
    identity::Caller,
};

/// POST /getMyLeague - Caller's league, rank and valid member count.
pub async fn get_my_league(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<CallableResponse<LeagueStanding>, CallableError> {
    let op = Operation::GetMyLeague;
    let identity = caller.require().map_err(|e| op.fail(&caller, e))?;

    state
        .app_bus
        .query(GetMyLeague::new(identity.uid.clone()), GetMyLeagueHandler::new())
        .await
        .map(CallableResponse)
        .map_err(|e| op.fail(&caller, e))
}
