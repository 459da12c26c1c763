//! End-to-end trivia flows against a real database.
//!
//! Requires a PostgreSQL `DATABASE_URL`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;
use trio_core::service::Service;

fn app(pool: &PgPool) -> axum::Router {
    common::build_test_app(Service::Trivia, pool.clone())
}

async fn seed(pool: &PgPool, count: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        let body = json!({
            "question": format!("Question number {n}?"),
            "answer": format!("Answer {n}"),
            "category": category,
            "difficulty": 1 + (n % 5) as i32,
        });
        let json = body_json(post_json(app(pool), "/questions", body).await).await;
        ids.push(json["created"].as_i64().unwrap());
    }
    ids
}

#[sqlx::test(migrations = "../db/migrations/trivia")]
async fn test_categories_map(pool: PgPool) {
    let json = body_json(get(app(&pool), "/categories").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["categories"]["1"], "Science");
    assert_eq!(json["categories"].as_object().unwrap().len(), 6);
}

#[sqlx::test(migrations = "../db/migrations/trivia")]
async fn test_no_categories_is_404(pool: PgPool) {
    sqlx::query("DELETE FROM category").execute(&pool).await.unwrap();

    let response = get(app(&pool), "/categories").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
}

#[sqlx::test(migrations = "../db/migrations/trivia")]
async fn test_questions_are_paginated(pool: PgPool) {
    seed(&pool, 12, 1).await;

    let json = body_json(get(app(&pool), "/questions").await).await;
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["total_questions"], 12);
    assert!(json["current_category"].is_null());

    let json = body_json(get(app(&pool), "/questions?page=2").await).await;
    assert_eq!(json["questions"].as_array().unwrap().len(), 2);

    let response = get(app(&pool), "/questions?page=3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations/trivia")]
async fn test_category_questions(pool: PgPool) {
    seed(&pool, 2, 3).await;
    seed(&pool, 1, 4).await;

    let json = body_json(get(app(&pool), "/categories/3/questions").await).await;
    assert_eq!(json["total_questions"], 2);
    assert_eq!(json["current_category"], 3);

    let response = get(app(&pool), "/categories/999/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations/trivia")]
async fn test_search_and_delete(pool: PgPool) {
    let ids = seed(&pool, 3, 2).await;

    let json = body_json(post_json(app(&pool), "/questions/search", json!({"searchTerm": "NUMBER 1"})).await).await;
    assert_eq!(json["total_questions"], 1);

    let json = body_json(post_json(app(&pool), "/questions/search?page=5", json!({"search_term": "question"})).await).await;
    assert!(json["questions"].as_array().unwrap().is_empty());
    assert_eq!(json["total_questions"], 3);

    let json = body_json(delete(app(&pool), &format!("/questions/{}", ids[0])).await).await;
    assert_eq!(json["deleted"], ids[0]);
    let response = delete(app(&pool), &format!("/questions/{}", ids[0])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations/trivia")]
async fn test_quiz_never_repeats(pool: PgPool) {
    let ids = seed(&pool, 3, 6).await;
    seed(&pool, 2, 5).await;

    let mut previous: Vec<i64> = Vec::new();
    for _ in 0..3 {
        let body = json!({"previous_questions": previous, "quiz_category": {"id": 6, "type": "Sports"}});
        let json = body_json(post_json(app(&pool), "/quizzes", body).await).await;
        let id = json["question"]["id"].as_i64().unwrap();
        assert!(ids.contains(&id));
        assert!(!previous.contains(&id));
        previous.push(id);
    }

    let body = json!({"previous_questions": previous, "quiz_category": 6});
    let json = body_json(post_json(app(&pool), "/quizzes", body).await).await;
    assert!(json["question"].is_null());

    let body = json!({"previous_questions": [], "quiz_category": 0});
    let json = body_json(post_json(app(&pool), "/quizzes", body).await).await;
    assert!(json["question"]["id"].is_i64());
}
