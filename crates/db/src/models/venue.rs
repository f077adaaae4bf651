//! Venue entity model, form DTO and view models.

use fyyur_core::types::{DbId, Timestamp};
use fyyur_core::validation::{
    validate_facebook_link, validate_genres, validate_phone, validate_short_text,
    validate_us_state,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::show::ArtistShow;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Submitted venue fields, used for both creation and full-overwrite edits.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct VenueForm {
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
    #[validate(
        length(min = 1, message = "This field is required."),
        custom(function = "validate_short_text")
    )]
    pub address: String,
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
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    #[validate(
        length(min = 1, message = "This field is required."),
        custom(function = "validate_genres")
    )]
    pub genres: Vec<String>,
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
            genres: venue.genres.clone(),
        }
    }
}

/// Result of a venue update.
#[derive(Debug)]
pub enum VenueUpdate {
    Updated(Venue),
    NotFound,
    /// Another venue already has the submitted (name, address) pair.
    Duplicate,
}

/// A venue with its upcoming-show count, as shown in lists and search results.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A summary row tagged with its location, before grouping.
#[derive(Debug, Clone, FromRow)]
pub struct VenueAreaRow {
    pub city: String,
    pub state: String,
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group rows into areas. Rows must already be ordered by location so that
/// every (city, state) pair is contiguous.
pub fn group_into_areas(rows: impl IntoIterator<Item = VenueAreaRow>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();
    for row in rows {
        let summary = VenueSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };
        match areas.last_mut() {
            Some(area) if area.city == row.city && area.state == row.state => {
                area.venues.push(summary);
            }
            _ => areas.push(VenueArea {
                city: row.city,
                state: row.state,
                venues: vec![summary],
            }),
        }
    }
    areas
}

/// A venue with its shows split around the request's `now`.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
