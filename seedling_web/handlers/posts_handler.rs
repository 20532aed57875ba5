use axum::extract::State;

use seedling_app::{command_handlers::DeleteAllPostsCommandHandler, cqrs::commands::DeleteAllPosts};
use seedling_types::learner::DeletionSummary;

use crate::{
    callable::{CallableError, CallableResponse, Operation},
    http::AppState,
    identity::Caller,
};

/// POST /deleteAllPosts - Wipes the whole `posts` collection in one commit.
/// Any authenticated caller may do this; there is no ownership check.
pub async fn delete_all_posts(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<CallableResponse<DeletionSummary>, CallableError> {
    let op = Operation::DeleteAllPosts;
    let identity = caller.require().map_err(|e| op.fail(&caller, e))?;

    state
        .app_bus
        .execute(
            DeleteAllPosts::new(identity.uid.clone()),
            DeleteAllPostsCommandHandler::new(),
        )
        .await
        .map(CallableResponse)
        .map_err(|e| op.fail(&caller, e))
}
