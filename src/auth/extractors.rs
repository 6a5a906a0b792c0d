use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::error::ApiError;

/// Token taken from an `Authorization: Bearer <token>` header.
///
/// The token is not validated against anything: login never records the
/// session ids it hands out.
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(auth) = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
        else {
            debug!("missing Authorization header");
            return Err(ApiError::Unauthorized("Invalid session"));
        };

        // Only the exact `Bearer ` scheme; the token itself may be empty.
        let token = auth
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or_else(|| {
                debug!("invalid auth scheme");
                ApiError::Unauthorized("Invalid session")
            })?;

        Ok(BearerToken(token.to_owned()))
    }
}
