//! HTTP-level integration tests for the `/artists` pages.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_artist, create_show, create_venue, delete, get, post_form,
    redirect_location, with, GUNS_N_PETALS, MUSICAL_HOP,
};
use sqlx::PgPool;

const MATT_QUEVEDO: &[(&str, &str)] = &[
    ("name", "Matt Quevedo"),
    ("city", "New York"),
    ("state", "NY"),
    ("phone", "300-400-5000"),
    ("genres", "Jazz"),
];

const WILD_SAX_BAND: &[(&str, &str)] = &[
    ("name", "The Wild Sax Band"),
    ("city", "San Francisco"),
    ("state", "CA"),
    ("genres", "Jazz"),
    ("genres", "Classical"),
];

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_artist_redirects_to_detail(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/artists/create", GUNS_N_PETALS).await;
    let location = redirect_location(&response);
    assert!(location.starts_with("/artists/"));

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &location).await).await;
    assert_eq!(json["name"], "Guns N Petals");
    assert_eq!(json["genres"], serde_json::json!(["Rock n Roll"]));
    assert_eq!(json["seeking_venue"], false);
    assert!(json.get("address").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_invalid_artist_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/artists/create",
        &with(GUNS_N_PETALS, "facebook_link", "not a url"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["fields"]["facebook_link"].is_array());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/artists").await).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_artists_with_same_name_are_allowed(pool: PgPool) {
    create_artist(&pool, GUNS_N_PETALS).await;
    create_artist(&pool, GUNS_N_PETALS).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/artists").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_artists_orders_by_name(pool: PgPool) {
    let sax = create_artist(&pool, WILD_SAX_BAND).await;
    let guns = create_artist(&pool, GUNS_N_PETALS).await;
    let matt = create_artist(&pool, MATT_QUEVEDO).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/artists").await).await;
    assert_eq!(
        json,
        serde_json::json!([
            {"id": guns, "name": "Guns N Petals"},
            {"id": matt, "name": "Matt Quevedo"},
            {"id": sax, "name": "The Wild Sax Band"},
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_artists(pool: PgPool) {
    let guns = create_artist(&pool, GUNS_N_PETALS).await;
    let matt = create_artist(&pool, MATT_QUEVEDO).await;
    let sax = create_artist(&pool, WILD_SAX_BAND).await;
    let venue = create_venue(&pool, MUSICAL_HOP).await;
    create_show(&pool, venue, sax, "2035-04-01T20:00:00Z").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(post_form(app, "/artists/search", &[("search_term", "A")]).await).await;
    assert_eq!(json["count"], 3);

    let app = common::build_test_app(pool.clone());
    let json = body_json(post_form(app, "/artists/search", &[("search_term", "band")]).await).await;
    assert_eq!(json["search_term"], "band");
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["id"], sax);
    assert_eq!(json["data"][0]["num_upcoming_shows"], 1);

    let app = common::build_test_app(pool);
    let json = body_json(post_form(app, "/artists/search", &[("search_term", "N P")]).await).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["id"], guns);
    assert_ne!(json["data"][0]["id"], matt);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_artist_detail_lists_venue_shows(pool: PgPool) {
    let artist = create_artist(&pool, GUNS_N_PETALS).await;
    let venue = create_venue(&pool, MUSICAL_HOP).await;
    create_show(&pool, venue, artist, "2019-05-21T21:30:00Z").await;
    create_show(&pool, venue, artist, "2035-04-01T20:00:00Z").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/artists/{artist}")).await).await;
    assert_eq!(json["past_shows_count"], 1);
    assert_eq!(json["upcoming_shows_count"], 1);
    assert_eq!(json["past_shows"][0]["venue_id"], venue);
    assert_eq!(json["past_shows"][0]["venue_name"], "The Musical Hop");
    assert_eq!(json["upcoming_shows"][0]["start_time"], "2035-04-01T20:00:00Z");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_artist_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, "/artists/424242").await.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, "/artists/424242/edit").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_edit_artist(pool: PgPool) {
    let artist = create_artist(&pool, GUNS_N_PETALS).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/artists/{artist}/edit")).await).await;
    assert_eq!(json["id"], artist);
    assert_eq!(json["form"]["phone"], "326-123-5000");

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/artists/{artist}/edit"),
        &[
            ("name", "Guns N Roses"),
            ("city", "Los Angeles"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
            ("genres", "Punk"),
            ("seeking_venue", "y"),
            ("seeking_description", "Looking for shows in LA."),
        ],
    )
    .await;
    assert_eq!(redirect_location(&response), format!("/artists/{artist}"));

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/artists/{artist}")).await).await;
    assert_eq!(json["name"], "Guns N Roses");
    assert_eq!(json["city"], "Los Angeles");
    assert_eq!(json["genres"], serde_json::json!(["Rock n Roll", "Punk"]));
    assert_eq!(json["seeking_venue"], true);
    assert_eq!(json["phone"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_artist_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/artists/424242/edit", GUNS_N_PETALS).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_artist_cascades_to_shows(pool: PgPool) {
    let artist = create_artist(&pool, GUNS_N_PETALS).await;
    let other = create_artist(&pool, MATT_QUEVEDO).await;
    let venue = create_venue(&pool, MUSICAL_HOP).await;
    create_show(&pool, venue, artist, "2035-04-01T20:00:00Z").await;
    create_show(&pool, venue, other, "2035-04-02T20:00:00Z").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/artists/{artist}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Artist was successfully deleted!");

    let app = common::build_test_app(pool.clone());
    let shows = body_json(get(app, "/shows").await).await;
    assert_eq!(shows.as_array().unwrap().len(), 1);
    assert_eq!(shows[0]["artist_id"], other);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/venues/{venue}")).await).await;
    assert_eq!(json["upcoming_shows_count"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_artist_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/artists/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Artist not found!");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_integer_artist_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/artists/x1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let app = common::build_test_app(pool);
    let response = delete(app, "/artists/x1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Artist not found!");
}
