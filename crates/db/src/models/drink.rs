//! Coffee shop drink model.
//!
//! The recipe column holds JSON text; [`Drink::short`] and [`Drink::long`]
//! decode it into the public and detailed representations.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::error::CoreError;
use trio_core::recipe::{self, Ingredient, IngredientSummary, RecipeInput};
use trio_core::types::DbId;

/// A row from the `drinks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: String,
}

/// Public representation: ingredient colours and proportions only.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkShort {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<IngredientSummary>,
}

/// Detailed representation including ingredient names.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkLong {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    pub fn short(&self) -> Result<DrinkShort, CoreError> {
        let ingredients = recipe::decode(&self.recipe)?;
        Ok(DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: recipe::summarize(&ingredients),
        })
    }

    pub fn long(&self) -> Result<DrinkLong, CoreError> {
        Ok(DrinkLong {
            id: self.id,
            title: self.title.clone(),
            recipe: recipe::decode(&self.recipe)?,
        })
    }
}

/// Body of `POST /drinks` and `PATCH /drinks/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrinkInput {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}

impl DrinkInput {
    /// Encoded recipe column value, if a recipe was supplied.
    pub fn encoded_recipe(&self) -> Result<Option<String>, CoreError> {
        self.recipe
            .clone()
            .map(|r| recipe::encode(&r.into_ingredients()))
            .transpose()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.recipe.is_none()
    }
}
