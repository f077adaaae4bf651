//! Shared response types for API handlers.

use axum::http::StatusCode;
use axum::Json;
use fyyur_core::catalog::{GENRES, US_STATES};
use fyyur_core::types::DbId;
use fyyur_db::models::SearchResults;
use serde::Serialize;

/// `{ "success": bool, "message": string }` body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    /// Pair a status code with an action body.
    pub fn reply(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Self>) {
        let body = Self {
            success: status.is_success(),
            message: message.into(),
        };
        (status, Json(body))
    }
}

/// Search results echoed together with the submitted term.
#[derive(Debug, Serialize)]
pub struct SearchResponse<T: Serialize> {
    pub search_term: String,
    #[serde(flatten)]
    pub results: SearchResults<T>,
}

/// Selectable values offered by the venue and artist forms.
#[derive(Debug, Serialize)]
pub struct FormChoices {
    pub genres: &'static [&'static str],
    pub states: &'static [&'static str],
}

impl Default for FormChoices {
    fn default() -> Self {
        Self {
            genres: GENRES,
            states: US_STATES,
        }
    }
}

/// A form ready to render: current field values plus the allowed choices.
///
/// `id` is set when the form edits an existing record.
#[derive(Debug, Serialize)]
pub struct FormView<F: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub form: F,
    pub choices: FormChoices,
}

impl<F: Serialize> FormView<F> {
    pub fn new(form: F) -> Self {
        Self {
            id: None,
            form,
            choices: FormChoices::default(),
        }
    }

    pub fn editing(id: DbId, form: F) -> Self {
        Self {
            id: Some(id),
            ..Self::new(form)
        }
    }
}
