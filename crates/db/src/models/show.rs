//! Show entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::types::{DbId, Timestamp};

/// A row from the `show` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub start_time: Timestamp,
    pub artist_id: DbId,
    pub venue_id: DbId,
}

/// A show joined with its venue and artist, for the `/shows` listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: Timestamp,
}

/// A show as seen from its venue's page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: Timestamp,
}

/// A show as seen from its artist's page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: Timestamp,
}

/// DTO for listing a new show. The referenced artist and venue must exist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

/// Shows on a venue or artist page, split into past and upcoming.
#[derive(Debug, Clone, Serialize)]
pub struct ShowSchedule<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<T> ShowSchedule<T> {
    /// Split `shows` around `now` using the in-progress grace period.
    pub fn split(shows: Vec<T>, now: Timestamp, start_of: impl Fn(&T) -> Timestamp) -> Self {
        let (past_shows, upcoming_shows) =
            trio_core::shows::partition_by_time(shows, now, start_of);
        Self {
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
