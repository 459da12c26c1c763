//! Listing-site field rules: music genres, US states and phone numbers.
//!
//! Genres are stored on venues and artists as one comma-separated column and
//! exposed to clients as a list. The `validate_*` functions plug into
//! `#[validate(custom(function = ...))]` on the create/update DTOs.

use std::collections::HashSet;

use validator::ValidationError;

/// Genres a venue or artist may list.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Two-letter US state (and DC) abbreviations.
pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Width of the `genres` column on `venue` and `artist`.
pub const GENRES_COLUMN_WIDTH: usize = 500;

/// Column separator for stored genres.
const SEPARATOR: char = ',';

/// Join genres into the stored column format (`"Jazz,Reggae,Swing"`).
pub fn join_genres(genres: &[String]) -> String {
    genres
        .iter()
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Split the stored column back into a list. An empty column is an empty list.
pub fn split_genres(stored: &str) -> Vec<String> {
    stored
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.is_empty() {
        return Err(ValidationError::new("genres_required")
            .with_message("at least one genre is required".into()));
    }
    if let Some(unknown) = genres.iter().find(|g| !GENRES.contains(&g.trim())) {
        return Err(ValidationError::new("unknown_genre")
            .with_message(format!("unknown genre '{unknown}'").into()));
    }
    let mut seen = HashSet::new();
    if let Some(repeated) = genres.iter().find(|g| !seen.insert(g.trim())) {
        return Err(ValidationError::new("duplicate_genre")
            .with_message(format!("genre '{repeated}' is listed twice").into()));
    }
    if join_genres(genres).len() > GENRES_COLUMN_WIDTH {
        return Err(ValidationError::new("genres_too_long")
            .with_message(format!("genres exceed {GENRES_COLUMN_WIDTH} characters").into()));
    }
    Ok(())
}

pub fn validate_state(state: &str) -> Result<(), ValidationError> {
    if US_STATES.contains(&state) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_state")
            .with_message(format!("'{state}' is not a US state abbreviation").into()))
    }
}

/// Accept digits plus the usual separators; require at least one digit.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.');
    if phone.chars().all(allowed) && phone.chars().any(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone")
            .with_message(format!("'{phone}' is not a phone number").into()))
    }
}
