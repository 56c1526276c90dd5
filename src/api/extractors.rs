use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;

pub const INVALID_USER_ID: &str = "Invalid user ID";
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// Integer `{id}` path segment
///
/// Rejects with 400 "Invalid user ID" before the handler runs, so no storage
/// access happens for a malformed id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request(INVALID_USER_ID))?;

        raw.parse::<i32>()
            .map(UserId)
            .map_err(|_| ApiError::bad_request(INVALID_USER_ID))
    }
}

/// JSON request body decoded regardless of the `Content-Type` header
///
/// Any read or decode failure rejects with 400 "Invalid request payload".
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::bad_request(INVALID_PAYLOAD))?;

        serde_json::from_slice(&bytes).map(JsonPayload).map_err(|e| {
            tracing::debug!(error = %e, "rejected request payload");
            ApiError::bad_request(INVALID_PAYLOAD)
        })
    }
}
