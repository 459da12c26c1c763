//! Request validation that happens before any query runs.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post_json};
use serde_json::json;
use trio_core::service::Service;

fn fyyur() -> axum::Router {
    common::build_test_app(Service::Fyyur, common::lazy_pool())
}

fn trivia() -> axum::Router {
    common::build_test_app(Service::Trivia, common::lazy_pool())
}

fn venue_body() -> serde_json::Value {
    json!({
        "name": "The Musical Hop",
        "city": "San Francisco",
        "state": "CA",
        "address": "1015 Folsom Street",
        "phone": "123-123-1234",
        "genres": ["Jazz", "Reggae"],
        "website": "https://www.themusicalhop.com",
        "seeking_talent": true
    })
}

fn artist_body() -> serde_json::Value {
    json!({
        "name": "Guns N Petals",
        "city": "San Francisco",
        "state": "CA",
        "phone": "326-123-5000",
        "genres": ["Rock n Roll"]
    })
}

// ---------------------------------------------------------------------------
// Fyyur
// ---------------------------------------------------------------------------

#[tokio::test]
async fn venue_with_unknown_state_is_400() {
    let mut body = venue_body();
    body["state"] = json!("ZZ");

    let response = post_json(fyyur(), "/venues", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("state"));
}

#[tokio::test]
async fn venue_with_unknown_genre_is_400() {
    let mut body = venue_body();
    body["genres"] = json!(["Jazz", "Polka"]);

    let response = post_json(fyyur(), "/venues", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn venue_with_repeated_genres_is_400() {
    let mut body = venue_body();
    body["genres"] = json!(vec!["Musical Theatre"; 40]);

    let response = post_json(fyyur(), "/venues", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("genres"));
}

#[tokio::test]
async fn venue_with_bad_website_is_400() {
    let mut body = venue_body();
    body["website"] = json!("not a url");

    let response = post_json(fyyur(), "/venues", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn venue_without_name_is_400() {
    let mut body = venue_body();
    body.as_object_mut().unwrap().remove("name");

    let response = post_json(fyyur(), "/venues", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn venue_update_is_validated() {
    let response = patch_json(fyyur(), "/venues/1", json!({"phone": "call me"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn artist_with_bad_phone_is_400() {
    let mut body = artist_body();
    body["phone"] = json!("ask at the bar");

    let response = post_json(fyyur(), "/artists", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn artist_without_genres_is_400() {
    let mut body = artist_body();
    body["genres"] = json!([]);

    let response = post_json(fyyur(), "/artists", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn show_with_unparsable_start_time_is_400() {
    let response = post_json(
        fyyur(),
        "/shows",
        json!({"artist_id": 1, "venue_id": 1, "start_time": "next tuesday"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Trivia
// ---------------------------------------------------------------------------

#[tokio::test]
async fn question_with_missing_field_is_400() {
    let response = post_json(
        trivia(),
        "/questions",
        json!({"question": "Who painted the Mona Lisa?", "answer": "", "category": 2, "difficulty": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn search_without_term_is_400() {
    let response = post_json(trivia(), "/questions/search", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn quiz_without_category_is_400() {
    let response = post_json(trivia(), "/quizzes", json!({"previous_questions": []})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_page_is_400() {
    let response = get(trivia(), "/categories/1/questions?page=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
