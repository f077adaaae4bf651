//! Field validators for venue, artist and show submissions.
//!
//! The input DTOs in `fyyur_db` derive [`validator::Validate`] and point their
//! `custom` rules at the functions below. [`validate_input`] runs a DTO's
//! rules and folds every failure into a single [`CoreError::InvalidFields`],
//! so callers always see all field errors at once.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::catalog::{is_genre, is_us_state};
use crate::error::CoreError;

/// Field name -> human readable messages, ordered by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Message attached to presence checks on required fields.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Every Facebook link must start with this prefix.
pub const FACEBOOK_PREFIX: &str = "https://www.facebook.com/";

/// Phone numbers are three dash-separated digit groups: `XXX-XXX-XXXX`.
pub const PHONE_PATTERN: &str = r"^\d{3}-\d{3}-\d{4}$";

/// Column width for city, address and Facebook link.
pub const SHORT_TEXT_MAX: usize = 120;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Custom rules
// ---------------------------------------------------------------------------

/// State must be one of the 51 US codes. Blank input is left to the
/// presence check so a missing state reports one error, not two.
pub fn validate_us_state(state: &str) -> Result<(), ValidationError> {
    if state.is_empty() || is_us_state(state) {
        return Ok(());
    }
    Err(ValidationError::new("state_enum").with_message(Cow::Owned(format!(
        "'{state}' is not a valid US state abbreviation."
    ))))
}

/// Every genre tag must belong to the genre enumeration. All offending tags
/// are named in one message.
pub fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    let invalid: Vec<&str> = genres
        .iter()
        .map(String::as_str)
        .filter(|g| !is_genre(g))
        .collect();
    if invalid.is_empty() {
        return Ok(());
    }
    let listed = invalid
        .iter()
        .map(|g| format!("'{g}'"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(ValidationError::new("genre_enum")
        .with_message(Cow::Owned(format!("{listed} is not a valid genre."))))
}

/// Phone must match [`PHONE_PATTERN`]. Only called when a phone is present.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        return Ok(());
    }
    Err(ValidationError::new("phone_format").with_message(Cow::Borrowed(
        "Invalid phone number. Format must be XXX-XXX-XXXX.",
    )))
}

/// Facebook link must carry [`FACEBOOK_PREFIX`]. URL well-formedness is
/// checked separately by the `url` rule on the same field.
pub fn validate_facebook_link(link: &str) -> Result<(), ValidationError> {
    if link.starts_with(FACEBOOK_PREFIX) {
        return Ok(());
    }
    Err(ValidationError::new("facebook_prefix").with_message(Cow::Owned(format!(
        "Facebook link must start with \"{FACEBOOK_PREFIX}\"."
    ))))
}

/// Required short text (city, address) must fit [`SHORT_TEXT_MAX`]
/// characters. Presence is checked by the `length` rule on the same field.
pub fn validate_short_text(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() <= SHORT_TEXT_MAX {
        return Ok(());
    }
    Err(ValidationError::new("too_long").with_message(Cow::Owned(format!(
        "Field cannot be longer than {SHORT_TEXT_MAX} characters."
    ))))
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Run all rules on `input`, returning every failing field at once.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::InvalidFields(field_errors(&errors)))
}

/// Flatten `validator`'s error tree into a field -> messages map.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(msg) => msg.to_string(),
                None => default_message(&e.code),
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}

fn default_message(code: &str) -> String {
    match code {
        "url" => "Invalid URL.".to_string(),
        "length" => REQUIRED_MESSAGE.to_string(),
        other => format!("Invalid value ({other})."),
    }
}
