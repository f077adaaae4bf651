//! Decoding of `application/x-www-form-urlencoded` submissions.
//!
//! HTML forms repeat a key once per selected option (`genres=Jazz&genres=Folk`),
//! which plain struct deserialization cannot express, so handlers extract
//! `Form<Vec<(String, String)>>` and build their DTOs through [`FormFields`].
//! Blank values are treated as absent and all values are trimmed.

use fyyur_core::timing::parse_start_time;
use fyyur_core::types::DbId;
use fyyur_core::validation::{FieldErrors, REQUIRED_MESSAGE};
use fyyur_db::models::artist::ArtistForm;
use fyyur_db::models::show::CreateShow;
use fyyur_db::models::venue::VenueForm;

/// Values HTML checkboxes and WTForms treat as "unchecked".
const FALSE_VALUES: &[&str] = &["", "false", "off", "0", "n", "no"];

/// Raw submitted key/value pairs in submission order.
#[derive(Debug, Default, Clone)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl FormFields {
    /// First non-blank value for `key`, trimmed.
    pub fn optional(&self, key: &str) -> Option<String> {
        self.values(key).next()
    }

    /// First non-blank value for `key`, or an empty string.
    pub fn text(&self, key: &str) -> String {
        self.optional(key).unwrap_or_default()
    }

    /// Every non-blank value for `key`, in submission order.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.values(key).collect()
    }

    /// Checkbox semantics: true when present with a truthy value.
    pub fn flag(&self, key: &str) -> bool {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .any(|(_, v)| !FALSE_VALUES.contains(&v.trim().to_ascii_lowercase().as_str()))
    }

    fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = String> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

/// Build a [`VenueForm`] from submitted fields. No validation happens here.
pub fn venue_form(fields: &FormFields) -> VenueForm {
    VenueForm {
        name: fields.text("name"),
        city: fields.text("city"),
        state: fields.text("state"),
        address: fields.text("address"),
        phone: fields.optional("phone"),
        image_link: fields.optional("image_link"),
        facebook_link: fields.optional("facebook_link"),
        website_link: fields.optional("website_link"),
        seeking_talent: fields.flag("seeking_talent"),
        seeking_description: fields.optional("seeking_description"),
        genres: fields.all("genres"),
    }
}

/// Build an [`ArtistForm`] from submitted fields. No validation happens here.
pub fn artist_form(fields: &FormFields) -> ArtistForm {
    ArtistForm {
        name: fields.text("name"),
        city: fields.text("city"),
        state: fields.text("state"),
        phone: fields.optional("phone"),
        image_link: fields.optional("image_link"),
        facebook_link: fields.optional("facebook_link"),
        website_link: fields.optional("website_link"),
        seeking_venue: fields.flag("seeking_venue"),
        seeking_description: fields.optional("seeking_description"),
        genres: fields.all("genres"),
    }
}

/// Parse a show submission. Referenced records are not checked here.
///
/// Every malformed field is reported, not just the first.
pub fn show_submission(fields: &FormFields) -> Result<CreateShow, FieldErrors> {
    let mut errors = FieldErrors::new();

    let venue_id = parse_id(fields, "venue_id", &mut errors);
    let artist_id = parse_id(fields, "artist_id", &mut errors);
    let start_time = match fields.optional("start_time") {
        None => {
            errors.insert("start_time".into(), vec![REQUIRED_MESSAGE.to_string()]);
            None
        }
        Some(raw) => {
            let parsed = parse_start_time(&raw);
            if parsed.is_none() {
                errors.insert(
                    "start_time".into(),
                    vec!["Not a valid datetime value.".to_string()],
                );
            }
            parsed
        }
    };

    match (venue_id, artist_id, start_time) {
        (Some(venue_id), Some(artist_id), Some(start_time)) if errors.is_empty() => {
            Ok(CreateShow {
                venue_id,
                artist_id,
                start_time,
            })
        }
        _ => Err(errors),
    }
}

fn parse_id(fields: &FormFields, key: &str, errors: &mut FieldErrors) -> Option<DbId> {
    let Some(raw) = fields.optional(key) else {
        errors.insert(key.to_string(), vec![REQUIRED_MESSAGE.to_string()]);
        return None;
    };
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.insert(key.to_string(), vec![format!("'{raw}' is not a valid id.")]);
            None
        }
    }
}
