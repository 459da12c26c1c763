//! Repository for the trivia `question` table.
//!
//! Listing queries return every matching row ordered by id; handlers page
//! the result with [`trio_core::pagination::page_slice`] because the
//! response also carries the unpaged total.

use sqlx::PgPool;
use trio_core::search::contains_pattern;
use trio_core::types::DbId;

use crate::models::question::{NewQuestion, Question};

const COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct QuestionRepo;

impl QuestionRepo {
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM question ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    pub async fn list_by_category(
        pool: &PgPool,
        category: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM question WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the question text.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM question WHERE question ILIKE $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM question WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &NewQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO question (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM question WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Quiz candidates in random order, optionally limited to one category.
    pub async fn random_for_quiz(
        pool: &PgPool,
        category: Option<DbId>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM question \
             WHERE $1::BIGINT IS NULL OR category = $1 \
             ORDER BY random()"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }
}
