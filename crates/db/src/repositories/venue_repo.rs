//! Repository for the `venue` table.

use sqlx::PgPool;
use trio_core::genres::join_genres;
use trio_core::search::contains_pattern;
use trio_core::shows::upcoming_cutoff;
use trio_core::types::{DbId, Timestamp};

use crate::models::show::VenueShow;
use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueSummary};

/// Column list for `venue` queries.
const COLUMNS: &str = "\
    id, name, city, state, address, phone, genres, website, image_link, \
    facebook_link, seeking_talent, seeking_description";

/// Summary columns plus the upcoming-show count; `$1` is the upcoming cutoff.
const SUMMARY_COLUMNS: &str = "\
    v.id, v.name, v.city, v.state, \
    (SELECT COUNT(*) FROM show s WHERE s.venue_id = v.id AND s.start_time > $1) \
        AS num_upcoming_shows";

pub struct VenueRepo;

impl VenueRepo {
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venue (name, city, state, address, phone, genres, website, \
                 image_link, facebook_link, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, ''), COALESCE($8, ''), \
                 COALESCE($9, ''), $10, COALESCE($11, '')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(join_genres(&input.genres))
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venue WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a venue together with every show booked there, ordered by start
    /// time. Both reads run in one REPEATABLE READ transaction so they see the
    /// same snapshot.
    pub async fn find_with_shows(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<(Venue, Vec<VenueShow>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM venue WHERE id = $1");
        let Some(venue) = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let shows = sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, \
                 s.start_time \
             FROM show s \
             JOIN artist a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some((venue, shows)))
    }

    /// Every venue with its upcoming-show count, ordered for grouping by area.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM venue v ORDER BY v.city, v.state, v.name, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(upcoming_cutoff(now))
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the venue name.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM venue v WHERE v.name ILIKE $2 ORDER BY v.name, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(upcoming_cutoff(now))
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Apply the provided fields. Returns `None` if the venue does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venue SET \
                 name = COALESCE($2, name), \
                 city = COALESCE($3, city), \
                 state = COALESCE($4, state), \
                 address = COALESCE($5, address), \
                 phone = COALESCE($6, phone), \
                 genres = COALESCE($7, genres), \
                 website = COALESCE($8, website), \
                 image_link = COALESCE($9, image_link), \
                 facebook_link = COALESCE($10, facebook_link), \
                 seeking_talent = COALESCE($11, seeking_talent), \
                 seeking_description = COALESCE($12, seeking_description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(input.genres.as_deref().map(join_genres))
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue and, through the foreign key, its shows.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venue WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
