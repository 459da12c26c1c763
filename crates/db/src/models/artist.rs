//! Artist entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::genres::{split_genres, validate_genres, validate_phone, validate_state};
use trio_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::show::{ArtistShow, ShowSchedule};

/// A row from the `artist` table.
#[derive(Debug, Clone, FromRow)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistView {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl From<Artist> for ArtistView {
    fn from(a: Artist) -> Self {
        Self {
            genres: split_genres(&a.genres),
            id: a.id,
            name: a.name,
            city: a.city,
            state: a.state,
            phone: a.phone,
            website: a.website,
            image_link: a.image_link,
            facebook_link: a.facebook_link,
            seeking_venue: a.seeking_venue,
            seeking_description: a.seeking_description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: ArtistView,
    #[serde(flatten)]
    pub schedule: ShowSchedule<ArtistShow>,
}

impl ArtistDetail {
    pub fn new(artist: Artist, shows: Vec<ArtistShow>, now: Timestamp) -> Self {
        Self {
            artist: artist.into(),
            schedule: ShowSchedule::split(shows, now, |s| s.start_time),
        }
    }
}

/// Artist entry in the listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
}

/// Artist entry in search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSearchHit {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtist {
    #[validate(length(min = 1, max = 500))]
    pub name: String,
    #[validate(length(min = 1, max = 120))]
    pub city: String,
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(custom(function = "validate_genres"))]
    pub genres: Vec<String>,
    #[validate(url, length(max = 120))]
    pub website: Option<String>,
    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[validate(length(max = 300))]
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateArtist {
    #[validate(length(min = 1, max = 500))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 120))]
    pub city: Option<String>,
    #[validate(custom(function = "validate_state"))]
    pub state: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_genres"))]
    pub genres: Option<Vec<String>>,
    #[validate(url, length(max = 120))]
    pub website: Option<String>,
    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,
    pub seeking_venue: Option<bool>,
    #[validate(length(max = 300))]
    pub seeking_description: Option<String>,
}
