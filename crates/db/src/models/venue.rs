//! Venue entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::genres::{split_genres, validate_genres, validate_phone, validate_state};
use trio_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::show::{ShowSchedule, VenueShow};

/// A row from the `venue` table. `genres` is the stored comma-separated form.
#[derive(Debug, Clone, FromRow)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: String,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// Client-facing venue with `genres` as a list.
#[derive(Debug, Clone, Serialize)]
pub struct VenueView {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl From<Venue> for VenueView {
    fn from(v: Venue) -> Self {
        Self {
            genres: split_genres(&v.genres),
            id: v.id,
            name: v.name,
            city: v.city,
            state: v.state,
            address: v.address,
            phone: v.phone,
            website: v.website,
            image_link: v.image_link,
            facebook_link: v.facebook_link,
            seeking_talent: v.seeking_talent,
            seeking_description: v.seeking_description,
        }
    }
}

/// A venue page: the venue plus its past and upcoming shows.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: VenueView,
    #[serde(flatten)]
    pub schedule: ShowSchedule<VenueShow>,
}

impl VenueDetail {
    pub fn new(venue: Venue, shows: Vec<VenueShow>, now: Timestamp) -> Self {
        Self {
            venue: venue.into(),
            schedule: ShowSchedule::split(shows, now, |s| s.start_time),
        }
    }
}

/// Short venue entry used by the listing and search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    #[serde(skip)]
    pub city: String,
    #[serde(skip)]
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing a city and state.
#[derive(Debug, Clone, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group summaries into areas. Input must already be ordered by city and
/// state; area order follows input order.
pub fn group_by_area(summaries: Vec<VenueSummary>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();
    for venue in summaries {
        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(venue);
            }
            _ => areas.push(Area {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![venue],
            }),
        }
    }
    areas
}

/// DTO for listing a new venue.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVenue {
    #[validate(length(min = 1, max = 500))]
    pub name: String,
    #[validate(length(min = 1, max = 120))]
    pub city: String,
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[validate(length(min = 1, max = 120))]
    pub address: String,
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
    pub seeking_talent: bool,
    #[validate(length(max = 300))]
    pub seeking_description: Option<String>,
}

/// DTO for editing a venue. All fields are optional; provided fields are
/// validated like [`CreateVenue`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVenue {
    #[validate(length(min = 1, max = 500))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 120))]
    pub city: Option<String>,
    #[validate(custom(function = "validate_state"))]
    pub state: Option<String>,
    #[validate(length(min = 1, max = 120))]
    pub address: Option<String>,
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
    pub seeking_talent: Option<bool>,
    #[validate(length(max = 300))]
    pub seeking_description: Option<String>,
}
