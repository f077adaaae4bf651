//! Custom extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use fyyur_core::types::DbId;

use crate::error::AppError;

/// The `{id}` segment of a record path.
///
/// An id that is not an integer names no record, so the rejection is the
/// JSON 404 rather than axum's plain-text 400.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for RecordId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::UnknownResource)?;
        raw.parse()
            .map(RecordId)
            .map_err(|_| AppError::UnknownResource)
    }
}
