use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use std::convert::Infallible;

use seedling_types::{
    common::Identity,
    errors::{AppError, ApplicationError},
};

use crate::http::AppState;

/// Claims read from an identity token. `exp` is enforced by the validator.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    name: Option<String>,
    email: Option<String>,
}

/// Verifies HS256 identity tokens minted by the identity provider.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<Identity, jsonwebtoken::errors::Error> {
        let claims = decode::<Claims>(token, &self.key, &self.validation)?.claims;

        Ok(Identity {
            uid: claims.sub,
            display_name: claims.name,
            email: claims.email,
        })
    }
}

/// The caller of an endpoint. Empty when no valid bearer token was presented.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<Identity>);

impl Caller {
    pub fn require(&self) -> Result<&Identity, ApplicationError> {
        self.0
            .as_ref()
            .ok_or(ApplicationError::App(AppError::AuthenticationRequired))
    }

    pub fn uid(&self) -> Option<&str> {
        self.0.as_ref().map(|identity| identity.uid.as_str())
    }
}

impl<S> FromRequestParts<S> for Caller
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(Caller(None));
        };

        let state = AppState::from_ref(state);
        match state.tokens.verify(token) {
            Ok(identity) => Ok(Caller(Some(identity))),
            Err(e) => {
                tracing::warn!("Identity token rejected: {}", e);
                Ok(Caller(None))
            }
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
