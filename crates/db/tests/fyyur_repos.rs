//! Integration tests for the venue, artist and show repositories.
//!
//! Requires a PostgreSQL `DATABASE_URL`.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use trio_core::search::matches_term;
use trio_db::models::artist::{CreateArtist, UpdateArtist};
use trio_db::models::show::CreateShow;
use trio_db::models::venue::{group_by_area, CreateVenue, UpdateVenue, VenueDetail};
use trio_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_venue(name: &str, city: &str, state: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: vec!["Jazz".to_string(), "Musical Theatre".to_string()],
        website: None,
        image_link: None,
        facebook_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        website: None,
        image_link: Some("https://example.com/artist.jpg".to_string()),
        facebook_link: None,
        seeking_venue: true,
        seeking_description: None,
    }
}

// ---------------------------------------------------------------------------
// Venues
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_create_venue_defaults_optional_fields(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    assert_eq!(venue.website, "");
    assert_eq!(venue.genres, "Jazz,Musical Theatre");
    assert!(!venue.seeking_talent);
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_list_groups_by_city_and_state(pool: PgPool) {
    for (name, city, state) in [
        ("Park Square", "San Francisco", "CA"),
        ("Dueling Pianos", "New York", "NY"),
        ("The Musical Hop", "San Francisco", "CA"),
    ] {
        VenueRepo::create(&pool, &new_venue(name, city, state)).await.unwrap();
    }

    let areas = group_by_area(VenueRepo::list_summaries(&pool, Utc::now()).await.unwrap());
    assert_eq!(areas.len(), 2);
    let sf = areas.iter().find(|a| a.city == "San Francisco").unwrap();
    assert_eq!(sf.venues.len(), 2);
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_search_is_case_insensitive_and_counts_upcoming(pool: PgPool) {
    let hop = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &new_venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Guns N Petals")).await.unwrap();
    let now = Utc::now();
    for offset in [Duration::days(-10), Duration::days(5), Duration::hours(-1)] {
        ShowRepo::create(
            &pool,
            &CreateShow {
                artist_id: artist.id,
                venue_id: hop.id,
                start_time: now + offset,
            },
        )
        .await
        .unwrap();
    }

    let hits = VenueRepo::search(&pool, "HOP", now).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, hop.id);
    // The show that started an hour ago is still in progress.
    assert_eq!(hits[0].num_upcoming_shows, 2);

    let all = VenueRepo::search(&pool, "music", now).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let hits = VenueRepo::search(&pool, "%", Utc::now()).await.unwrap();
    assert!(hits.is_empty());
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_venue_detail_splits_shows(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Guns N Petals")).await.unwrap();
    let now = Utc::now();
    for offset in [Duration::days(-30), Duration::days(3)] {
        ShowRepo::create(
            &pool,
            &CreateShow {
                artist_id: artist.id,
                venue_id: venue.id,
                start_time: now + offset,
            },
        )
        .await
        .unwrap();
    }

    let (venue, shows) = VenueRepo::find_with_shows(&pool, venue.id).await.unwrap().unwrap();
    let detail = VenueDetail::new(venue, shows, now);
    assert_eq!(detail.schedule.past_shows_count, 1);
    assert_eq!(detail.schedule.upcoming_shows_count, 1);
    assert_eq!(detail.schedule.upcoming_shows[0].artist_name, "Guns N Petals");
    assert_eq!(detail.venue.genres, vec!["Jazz", "Musical Theatre"]);
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_update_venue_keeps_unset_fields(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let update = UpdateVenue {
        city: Some("Oakland".to_string()),
        genres: Some(vec!["Folk".to_string()]),
        ..Default::default()
    };
    let updated = VenueRepo::update(&pool, venue.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.city, "Oakland");
    assert_eq!(updated.genres, "Folk");
    assert_eq!(updated.name, "The Musical Hop");

    let missing = VenueRepo::update(&pool, 999_999, &update).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_delete_venue_cascades_to_shows(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Guns N Petals")).await.unwrap();
    ShowRepo::create(
        &pool,
        &CreateShow {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time: Utc::now(),
        },
    )
    .await
    .unwrap();

    assert!(VenueRepo::delete(&pool, venue.id).await.unwrap());
    assert!(!VenueRepo::delete(&pool, venue.id).await.unwrap());
    assert!(ShowRepo::list_detailed(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Artists and shows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_artist_crud(pool: PgPool) {
    let artist = ArtistRepo::create(&pool, &new_artist("Matt Quevedo")).await.unwrap();
    assert_eq!(ArtistRepo::list(&pool).await.unwrap().len(), 1);

    let update = UpdateArtist {
        seeking_venue: Some(false),
        ..Default::default()
    };
    let updated = ArtistRepo::update(&pool, artist.id, &update).await.unwrap().unwrap();
    assert!(!updated.seeking_venue);

    let hits = ArtistRepo::search(&pool, "quev", Utc::now()).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].num_upcoming_shows, 0);

    assert!(ArtistRepo::delete(&pool, artist.id).await.unwrap());
    assert!(ArtistRepo::find_by_id(&pool, artist.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_search_count_matches_substring_filter(pool: PgPool) {
    for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band", "100% Petal_Power"] {
        ArtistRepo::create(&pool, &new_artist(name)).await.unwrap();
    }
    let all = ArtistRepo::list(&pool).await.unwrap();

    for term in ["pet", "A", "_", "%", "zzz", ""] {
        let hits = ArtistRepo::search(&pool, term, Utc::now()).await.unwrap();
        let expected = all.iter().filter(|a| matches_term(&a.name, term)).count();
        assert_eq!(hits.len(), expected, "term {term:?}");
    }
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_show_with_unknown_artist_rejected(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let result = ShowRepo::create(
        &pool,
        &CreateShow {
            artist_id: 999_999,
            venue_id: venue.id,
            start_time: Utc::now(),
        },
    )
    .await;
    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "./migrations/fyyur")]
async fn test_show_listing_joins_names(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Guns N Petals")).await.unwrap();
    ShowRepo::create(
        &pool,
        &CreateShow {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time: Utc::now(),
        },
    )
    .await
    .unwrap();

    let listing = ShowRepo::list_detailed(&pool).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].venue_name, "The Musical Hop");
    assert_eq!(listing[0].artist_image_link, "https://example.com/artist.jpg");
}
