//! Callable-function wire format.
//!
//! Requests carry `{"data": ...}`; successes answer `{"result": ...}` and
//! failures answer `{"error": {"status": ..., "message": ...}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use seedling_types::errors::{AppError, ApplicationError};

use crate::identity::Caller;

/// The remote operations exposed by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetMyLeague,
    GetMyProfile,
    GetMyGarden,
    AddPoints,
    DeleteAllPosts,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::GetMyLeague => "getMyLeague",
            Self::GetMyProfile => "getMyProfile",
            Self::GetMyGarden => "getMyGarden",
            Self::AddPoints => "addPoints",
            Self::DeleteAllPosts => "deleteAllPosts",
        }
    }

    fn activity(self) -> &'static str {
        match self {
            Self::GetMyLeague => "getting league info",
            Self::GetMyProfile => "getting profile",
            Self::GetMyGarden => "getting garden",
            Self::AddPoints => "adding points",
            Self::DeleteAllPosts => "deleting all posts",
        }
    }

    fn failure_prefix(self) -> &'static str {
        match self {
            Self::GetMyLeague => "Failed to get league info",
            Self::GetMyProfile => "Failed to get profile",
            Self::GetMyGarden => "Failed to get garden",
            Self::AddPoints => "Failed to add points",
            Self::DeleteAllPosts => "Failed to delete posts",
        }
    }

    /// Logs `error` for this operation and turns it into a wire error.
    pub fn fail(self, caller: &Caller, error: ApplicationError) -> CallableError {
        tracing::error!(
            operation = self.name(),
            caller = caller.uid().unwrap_or("<anonymous>"),
            "Error {}: {}",
            self.activity(),
            error
        );

        CallableError {
            operation: self,
            error,
        }
    }
}

/// Extracts the `data` member of a callable request body. An empty body means no data.
pub fn request_data(body: &[u8]) -> Result<Value, ApplicationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    let mut envelope: Value = serde_json::from_slice(body)?;
    Ok(envelope
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null))
}

/// Successful callable response.
pub struct CallableResponse<T>(pub T);

#[derive(Serialize)]
struct ResultEnvelope<'a, T> {
    result: &'a T,
}

impl<T: Serialize> IntoResponse for CallableResponse<T> {
    fn into_response(self) -> Response {
        Json(ResultEnvelope { result: &self.0 }).into_response()
    }
}

/// Failed callable response. The message includes the underlying error text.
#[derive(Debug)]
pub struct CallableError {
    pub operation: Operation,
    pub error: ApplicationError,
}

impl CallableError {
    pub fn status(&self) -> (StatusCode, &'static str) {
        match &self.error {
            ApplicationError::App(AppError::AuthenticationRequired) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED")
            }
            ApplicationError::App(AppError::InvalidAmount) | ApplicationError::Json(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        }
    }

    pub fn message(&self) -> String {
        format!("{}: {}", self.operation.failure_prefix(), self.error)
    }
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        let (code, status) = self.status();
        let body = json!({
            "error": {
                "status": status,
                "message": self.message(),
            }
        });

        (code, Json(body)).into_response()
    }
}
