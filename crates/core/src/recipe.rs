//! Drink recipes.
//!
//! A recipe is a list of ingredients stored as serialized JSON text in the
//! `drinks.recipe` column. Public listings only reveal each ingredient's
//! colour and proportion; the detailed view shows names too.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One layer of a drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

/// Public view of an ingredient: no name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientSummary {
    pub color: String,
    pub parts: u32,
}

/// A recipe as posted by clients, which send either a single ingredient
/// object or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(ingredients) => ingredients,
            RecipeInput::One(ingredient) => vec![ingredient],
        }
    }
}

/// Serialize a recipe into its column format.
pub fn encode(ingredients: &[Ingredient]) -> Result<String, CoreError> {
    serde_json::to_string(ingredients)
        .map_err(|e| CoreError::Internal(format!("failed to encode recipe: {e}")))
}

/// Parse a stored recipe column. Accepts the single-object form older rows
/// may hold.
pub fn decode(stored: &str) -> Result<Vec<Ingredient>, CoreError> {
    serde_json::from_str::<RecipeInput>(stored)
        .map(RecipeInput::into_ingredients)
        .map_err(|e| CoreError::Internal(format!("stored recipe is not valid JSON: {e}")))
}

pub fn summarize(ingredients: &[Ingredient]) -> Vec<IngredientSummary> {
    ingredients
        .iter()
        .map(|i| IngredientSummary {
            color: i.color.clone(),
            parts: i.parts,
        })
        .collect()
}
