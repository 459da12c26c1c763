//! Repository for the `artist` table.

use sqlx::PgPool;
use trio_core::genres::join_genres;
use trio_core::search::contains_pattern;
use trio_core::shows::upcoming_cutoff;
use trio_core::types::{DbId, Timestamp};

use crate::models::artist::{Artist, ArtistSearchHit, ArtistSummary, CreateArtist, UpdateArtist};
use crate::models::show::ArtistShow;

const COLUMNS: &str = "\
    id, name, city, state, phone, genres, website, image_link, \
    facebook_link, seeking_venue, seeking_description";

pub struct ArtistRepo;

impl ArtistRepo {
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artist (name, city, state, phone, genres, website, image_link, \
                 facebook_link, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, ''), COALESCE($7, ''), \
                 COALESCE($8, ''), $9, COALESCE($10, '')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(join_genres(&input.genres))
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artist WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load an artist and every show they play, ordered by start time, from
    /// one REPEATABLE READ snapshot.
    pub async fn find_with_shows(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<(Artist, Vec<ArtistShow>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM artist WHERE id = $1");
        let Some(artist) = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let shows = sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, \
                 s.start_time \
             FROM show s \
             JOIN venue v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some((artist, shows)))
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artist ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the artist name.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<ArtistSearchHit>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSearchHit>(
            "SELECT a.id, a.name, \
                 (SELECT COUNT(*) FROM show s \
                  WHERE s.artist_id = a.id AND s.start_time > $1) AS num_upcoming_shows \
             FROM artist a \
             WHERE a.name ILIKE $2 \
             ORDER BY a.name, a.id",
        )
        .bind(upcoming_cutoff(now))
        .bind(contains_pattern(term))
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artist SET \
                 name = COALESCE($2, name), \
                 city = COALESCE($3, city), \
                 state = COALESCE($4, state), \
                 phone = COALESCE($5, phone), \
                 genres = COALESCE($6, genres), \
                 website = COALESCE($7, website), \
                 image_link = COALESCE($8, image_link), \
                 facebook_link = COALESCE($9, facebook_link), \
                 seeking_venue = COALESCE($10, seeking_venue), \
                 seeking_description = COALESCE($11, seeking_description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(input.genres.as_deref().map(join_genres))
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artist WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
