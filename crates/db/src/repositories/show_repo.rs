//! Repository for the `show` table.

use sqlx::PgPool;

use crate::models::show::{CreateShow, Show, ShowListing};

pub struct ShowRepo;

impl ShowRepo {
    /// Insert a show. A missing artist or venue surfaces as a foreign-key
    /// violation from the database.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        sqlx::query_as::<_, Show>(
            "INSERT INTO show (start_time, artist_id, venue_id) \
             VALUES ($1, $2, $3) \
             RETURNING id, start_time, artist_id, venue_id",
        )
        .bind(input.start_time)
        .bind(input.artist_id)
        .bind(input.venue_id)
        .fetch_one(pool)
        .await
    }

    /// Every show joined with its venue and artist, soonest first.
    pub async fn list_detailed(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name, s.artist_id, \
                 a.name AS artist_name, a.image_link AS artist_image_link, s.start_time \
             FROM show s \
             JOIN venue v ON v.id = s.venue_id \
             JOIN artist a ON a.id = s.artist_id \
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(pool)
        .await
    }
}
