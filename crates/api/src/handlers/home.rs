//! Handler for the landing page.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use fyyur_db::models::NamedRef;
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// How many recently listed venues and artists the landing page shows.
const RECENT_LIMIT: i64 = 10;

/// Landing page summary.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub venue_count: i64,
    pub artist_count: i64,
    pub upcoming_show_count: i64,
    pub recent_venues: Vec<NamedRef>,
    pub recent_artists: Vec<NamedRef>,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Json<HomeView>> {
    let now = Utc::now();
    Ok(Json(HomeView {
        venue_count: VenueRepo::count(&state.pool).await?,
        artist_count: ArtistRepo::count(&state.pool).await?,
        upcoming_show_count: ShowRepo::count_upcoming(&state.pool, now).await?,
        recent_venues: VenueRepo::list_recent(&state.pool, RECENT_LIMIT).await?,
        recent_artists: ArtistRepo::list_recent(&state.pool, RECENT_LIMIT).await?,
    }))
}
