//! Repository for the coffee shop `drinks` table.

use sqlx::PgPool;
use trio_core::types::DbId;

use crate::models::drink::Drink;

const COLUMNS: &str = "id, title, recipe";

pub struct DrinkRepo;

impl DrinkRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks ORDER BY id");
        sqlx::query_as::<_, Drink>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drinks WHERE id = $1");
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a drink. `recipe` is the already-encoded column value.
    pub async fn create(pool: &PgPool, title: &str, recipe: &str) -> Result<Drink, sqlx::Error> {
        let query = format!("INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Drink>(&query)
            .bind(title)
            .bind(recipe)
            .fetch_one(pool)
            .await
    }

    /// Update title and/or recipe. Returns `None` if the drink does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
        recipe: Option<&str>,
    ) -> Result<Option<Drink>, sqlx::Error> {
        let query = format!(
            "UPDATE drinks SET \
                 title = COALESCE($2, title), \
                 recipe = COALESCE($3, recipe) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Drink>(&query)
            .bind(id)
            .bind(title)
            .bind(recipe)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
