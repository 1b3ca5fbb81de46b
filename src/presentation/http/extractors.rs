// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    domain::post::AuthorId,
};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Name of the header the upstream gateway injects after authenticating the
/// request. Authentication itself happens outside this service.
pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(format!(
                    "missing {USER_ID_HEADER} header"
                )))
            })?;

        let id = raw.parse::<i64>().map_err(|_| {
            HttpError::from_error(ApplicationError::unauthorized(format!(
                "malformed {USER_ID_HEADER} header"
            )))
        })?;

        let id = AuthorId::new(id).map_err(|_| {
            HttpError::from_error(ApplicationError::unauthorized(format!(
                "malformed {USER_ID_HEADER} header"
            )))
        })?;

        Ok(Self(AuthenticatedUser { id }))
    }
}
