//! Handlers for the `/venues` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Form, Json};
use chrono::Utc;
use fyyur_core::error::CoreError;
use fyyur_core::types::DbId;
use fyyur_core::validation::validate_input;
use fyyur_db::models::venue::{VenueArea, VenueDetail, VenueForm, VenueSummary, VenueUpdate};
use fyyur_db::models::SearchResults;
use fyyur_db::repositories::VenueRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::RecordId;
use crate::form::{venue_form, FormFields};
use crate::response::{ActionResponse, FormView, SearchResponse};
use crate::state::AppState;

/// Body of the search form.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

fn duplicate() -> AppError {
    AppError::Core(CoreError::Conflict(
        "A venue with this name and address already exists. \
         Try again with a different name or address."
            .to_string(),
    ))
}

/// GET /venues
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<VenueArea>>> {
    let areas = VenueRepo::list_areas(&state.pool, Utc::now()).await?;
    Ok(Json(areas))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    Form(input): Form<SearchForm>,
) -> AppResult<Json<SearchResponse<VenueSummary>>> {
    let venues = VenueRepo::search(&state.pool, &input.search_term, Utc::now()).await?;
    Ok(Json(SearchResponse {
        search_term: input.search_term,
        results: SearchResults::new(venues),
    }))
}

/// GET /venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<VenueDetail>> {
    let venue = VenueRepo::find_detail(&state.pool, id, Utc::now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(venue))
}

/// GET /venues/create
pub async fn create_form() -> Json<FormView<VenueForm>> {
    Json(FormView::new(VenueForm::default()))
}

/// POST /venues/create
///
/// Validates every field, rejects a duplicate (name, address) pair, then
/// redirects to the new venue's page.
pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Redirect> {
    let input = venue_form(&FormFields::from(pairs));
    validate_input(&input)?;

    let venue = VenueRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::persistence(format!(
            "Venue {} could not be listed",
            input.name
        )))?
        .ok_or_else(duplicate)?;

    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");
    Ok(Redirect::to(&format!("/venues/{}", venue.id)))
}

/// GET /venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<FormView<VenueForm>>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(FormView::editing(id, VenueForm::from(&venue))))
}

/// POST /venues/{id}/edit
///
/// Full overwrite of every mutable field.
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Redirect> {
    let input = venue_form(&FormFields::from(pairs));
    validate_input(&input)?;

    let outcome = VenueRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::persistence(format!(
            "Venue {} could not be updated",
            input.name
        )))?;

    match outcome {
        VenueUpdate::Updated(venue) => {
            tracing::info!(venue_id = venue.id, "Venue updated");
            Ok(Redirect::to(&format!("/venues/{id}")))
        }
        VenueUpdate::NotFound => Err(not_found(id)),
        VenueUpdate::Duplicate => Err(duplicate()),
    }
}

/// DELETE /venues/{id}
///
/// Removes the venue and its shows. Always answers `{success, message}`.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<RecordId, AppError>,
) -> (StatusCode, Json<ActionResponse>) {
    let Ok(RecordId(id)) = id else {
        return ActionResponse::reply(StatusCode::NOT_FOUND, "Venue not found!");
    };
    match VenueRepo::delete(&state.pool, id).await {
        Ok(Some(shows)) => {
            tracing::info!(venue_id = id, shows, "Venue deleted");
            ActionResponse::reply(StatusCode::OK, "Venue was successfully deleted!")
        }
        Ok(None) => ActionResponse::reply(StatusCode::NOT_FOUND, "Venue not found!"),
        Err(e) => {
            tracing::error!(venue_id = id, error = %e, "Venue delete rolled back");
            ActionResponse::reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Venue was not successfully deleted!",
            )
        }
    }
}
