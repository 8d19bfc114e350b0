//! JSON body extractor
//!
//! Decodes the body as JSON whatever the `Content-Type` header says, and
//! collapses every failure (unreadable body, bad syntax, wrong field types)
//! into [`ApiError::InvalidBody`]. axum's own `Json` would answer with a mix
//! of 400/415/422 and plain-text bodies instead.
//!
//! Only the first JSON value is read; anything after it is ignored. A
//! literal `null` decodes to `T::default()`.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::response::ApiError;

#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(path = %path, error = %e, "Failed to read request body");
            ApiError::InvalidBody
        })?;
        let first = serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<Option<T>>()
            .next();
        match first {
            Some(Ok(value)) => Ok(JsonBody(value.unwrap_or_default())),
            Some(Err(e)) => {
                tracing::debug!(path = %path, error = %e, "Rejected request body");
                Err(ApiError::InvalidBody)
            }
            None => {
                tracing::debug!(path = %path, "Empty request body");
                Err(ApiError::InvalidBody)
            }
        }
    }
}
