//! Handlers for the `/artists` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Form, Json};
use chrono::Utc;
use fyyur_core::error::CoreError;
use fyyur_core::types::DbId;
use fyyur_core::validation::validate_input;
use fyyur_db::models::artist::{ArtistDetail, ArtistForm, ArtistSummary};
use fyyur_db::models::{NamedRef, SearchResults};
use fyyur_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::extract::RecordId;
use crate::form::{artist_form, FormFields};
use crate::handlers::venue::SearchForm;
use crate::response::{ActionResponse, FormView, SearchResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

/// GET /artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NamedRef>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(artists))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    Form(input): Form<SearchForm>,
) -> AppResult<Json<SearchResponse<ArtistSummary>>> {
    let artists = ArtistRepo::search(&state.pool, &input.search_term, Utc::now()).await?;
    Ok(Json(SearchResponse {
        search_term: input.search_term,
        results: SearchResults::new(artists),
    }))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<ArtistDetail>> {
    let artist = ArtistRepo::find_detail(&state.pool, id, Utc::now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(artist))
}

/// GET /artists/create
pub async fn create_form() -> Json<FormView<ArtistForm>> {
    Json(FormView::new(ArtistForm::default()))
}

/// POST /artists/create
pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Redirect> {
    let input = artist_form(&FormFields::from(pairs));
    validate_input(&input)?;

    let artist = ArtistRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::persistence(format!(
            "Artist {} could not be listed",
            input.name
        )))?;

    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");
    Ok(Redirect::to(&format!("/artists/{}", artist.id)))
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<FormView<ArtistForm>>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(FormView::editing(id, ArtistForm::from(&artist))))
}

/// POST /artists/{id}/edit
///
/// Full overwrite of every mutable field.
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Redirect> {
    let input = artist_form(&FormFields::from(pairs));
    validate_input(&input)?;

    ArtistRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::persistence(format!(
            "Artist {} could not be updated",
            input.name
        )))?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(artist_id = id, "Artist updated");
    Ok(Redirect::to(&format!("/artists/{id}")))
}

/// DELETE /artists/{id}
///
/// Removes the artist and its shows. Always answers `{success, message}`.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<RecordId, AppError>,
) -> (StatusCode, Json<ActionResponse>) {
    let Ok(RecordId(id)) = id else {
        return ActionResponse::reply(StatusCode::NOT_FOUND, "Artist not found!");
    };
    match ArtistRepo::delete(&state.pool, id).await {
        Ok(Some(shows)) => {
            tracing::info!(artist_id = id, shows, "Artist deleted");
            ActionResponse::reply(StatusCode::OK, "Artist was successfully deleted!")
        }
        Ok(None) => ActionResponse::reply(StatusCode::NOT_FOUND, "Artist not found!"),
        Err(e) => {
            tracing::error!(artist_id = id, error = %e, "Artist delete rolled back");
            ActionResponse::reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Artist was not successfully deleted!",
            )
        }
    }
}
