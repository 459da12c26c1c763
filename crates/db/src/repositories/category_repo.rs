//! Repository for the trivia `category` table.

use sqlx::PgPool;
use trio_core::types::DbId;

use crate::models::category::Category;

pub struct CategoryRepo;

impl CategoryRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM category ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM category WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
