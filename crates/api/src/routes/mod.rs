pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                    landing summary
///
/// /venues                              areas view (GET)
/// /venues/search                       search (POST)
/// /venues/create                       form (GET), submit (POST)
/// /venues/{id}                         detail (GET), delete (DELETE)
/// /venues/{id}/edit                    form (GET), submit (POST)
///
/// /artists                             list (GET)
/// /artists/search                      search (POST)
/// /artists/create                      form (GET), submit (POST)
/// /artists/{id}                        detail (GET), delete (DELETE)
/// /artists/{id}/edit                   form (GET), submit (POST)
///
/// /shows                               list (GET)
/// /shows/create                        form (GET), submit (POST)
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
