//! Handlers for the `/shows` resource. Shows can be listed and created only.

use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use chrono::Utc;
use fyyur_core::error::CoreError;
use fyyur_core::types::{DbId, Timestamp};
use fyyur_core::validation::FieldErrors;
use fyyur_db::models::show::ShowListing;
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::form::{show_submission, FormFields};
use crate::state::AppState;

/// Default values for an empty show form.
#[derive(Debug, Serialize)]
pub struct ShowFormView {
    pub venue_id: Option<DbId>,
    pub artist_id: Option<DbId>,
    pub start_time: Timestamp,
}

/// GET /shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ShowListing>>> {
    let shows = ShowRepo::list_all(&state.pool).await?;
    Ok(Json(shows))
}

/// GET /shows/create
pub async fn create_form() -> Json<ShowFormView> {
    Json(ShowFormView {
        venue_id: None,
        artist_id: None,
        start_time: Utc::now(),
    })
}

/// POST /shows/create
///
/// Both referenced records must exist; missing ones are reported as field
/// errors alongside any parse failures.
pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Redirect> {
    let input = show_submission(&FormFields::from(pairs))
        .map_err(|fields| AppError::Core(CoreError::InvalidFields(fields)))?;

    let mut missing = FieldErrors::new();
    if !VenueRepo::exists(&state.pool, input.venue_id).await? {
        missing.insert(
            "venue_id".into(),
            vec![format!("Venue {} does not exist.", input.venue_id)],
        );
    }
    if !ArtistRepo::exists(&state.pool, input.artist_id).await? {
        missing.insert(
            "artist_id".into(),
            vec![format!("Artist {} does not exist.", input.artist_id)],
        );
    }
    if !missing.is_empty() {
        return Err(AppError::Core(CoreError::InvalidFields(missing)));
    }

    let show = ShowRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::persistence("Show could not be listed"))?;

    tracing::info!(
        show_id = show.id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        "Show listed"
    );
    Ok(Redirect::to("/shows"))
}
