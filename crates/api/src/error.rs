use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fyyur_core::error::CoreError;
use fyyur_core::validation::FieldErrors;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fyyur_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx on a read path.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A write that was rolled back. `action` names what could not be done.
    #[error("{action}: {source}")]
    Persistence {
        action: String,
        #[source]
        source: sqlx::Error,
    },

    /// The path names no record: an unknown route or an id that does not
    /// parse.
    #[error("Resource not found")]
    UnknownResource,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a mapper turning a failed write into [`AppError::Persistence`].
    ///
    /// ```ignore
    /// VenueRepo::create(&pool, &input)
    ///     .await
    ///     .map_err(AppError::persistence("Venue could not be listed"))?;
    /// ```
    pub fn persistence(action: impl Into<String>) -> impl FnOnce(sqlx::Error) -> AppError {
        let action = action.into();
        move |source| AppError::Persistence { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields: Option<FieldErrors> = None;

        let (status, code, message) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidFields(errors) => {
                    fields = Some(errors);
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "VALIDATION_ERROR",
                        "Form validation failed. Please correct the errors and try again."
                            .to_string(),
                    )
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(&err),
            AppError::Persistence { action, source } => match unique_violation(&source) {
                Some(constraint) => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                None => {
                    tracing::error!(error = %source, %action, "Write rolled back");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "PERSISTENCE_ERROR",
                        format!("{action}. Error: {source}"),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::UnknownResource => not_found(),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        (status, axum::Json(body)).into_response()
    }
}

fn not_found() -> (StatusCode, &'static str, String) {
    (
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        "Resource not found".to_string(),
    )
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Name of the violated constraint when `err` is a PostgreSQL unique
/// violation (23505) on a constraint following the `uq_` naming convention.
fn unique_violation(err: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if db_err.code().as_deref() != Some("23505") {
        return None;
    }
    db_err
        .constraint()
        .filter(|c| c.starts_with("uq_"))
        .map(str::to_string)
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let Some(constraint) = unique_violation(err) {
        return (
            StatusCode::CONFLICT,
            "CONFLICT",
            format!("Duplicate value violates unique constraint: {constraint}"),
        );
    }
    match err {
        sqlx::Error::RowNotFound => not_found(),
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}
