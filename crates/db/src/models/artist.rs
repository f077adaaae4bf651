//! Artist entity model, form DTO and view models.

use fyyur_core::types::{DbId, Timestamp};
use fyyur_core::validation::{
    validate_facebook_link, validate_genres, validate_phone, validate_short_text,
    validate_us_state,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::show::VenueShow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Submitted artist fields, used for both creation and full-overwrite edits.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct ArtistForm {
    #[validate(length(min = 1, message = "This field is required."))]
    pub name: String,
    #[validate(
        length(min = 1, message = "This field is required."),
        custom(function = "validate_short_text")
    )]
    pub city: String,
    #[validate(
        length(min = 1, message = "This field is required."),
        custom(function = "validate_us_state")
    )]
    pub state: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(length(max = 500, message = "Field cannot be longer than 500 characters."))]
    pub image_link: Option<String>,
    #[validate(
        url(message = "Invalid URL."),
        length(max = 120, message = "Field cannot be longer than 120 characters."),
        custom(function = "validate_facebook_link")
    )]
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    #[validate(
        length(min = 1, message = "This field is required."),
        custom(function = "validate_genres")
    )]
    pub genres: Vec<String>,
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
            genres: artist.genres.clone(),
        }
    }
}

/// An artist with its upcoming-show count, as shown in search results.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// An artist with its shows split around the request's `now`.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
