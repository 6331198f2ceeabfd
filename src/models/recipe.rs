use super::favorite::{deserialize_optional_recipe_id, RecipeId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Recipe as returned by the third-party recipe search (before it is saved)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRecipe {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionGroup>,
    #[serde(default)]
    pub extended_ingredients: Vec<ExternalIngredient>,
    #[serde(default)]
    pub vegetarian: Option<bool>,
    #[serde(default)]
    pub vegan: Option<bool>,
    #[serde(default)]
    pub gluten_free: Option<bool>,
}

/// Named block of steps ("For the sauce", ...); the name is often empty
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstructionGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

/// A single step, forwarded to the backend as received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>, // ingredients/equipment/length annotations
}

impl InstructionStep {
    pub fn new(number: u32, step: impl Into<String>) -> Self {
        Self {
            number: Some(number),
            step: Some(step.into()),
            extra: Map::new(),
        }
    }
}

/// Ingredient in the search shape; source-specific fields land in `extra`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalIngredient {
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ingredient in the persisted shape; a missing amount or unit stays missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl From<&ExternalIngredient> for Ingredient {
    fn from(ingredient: &ExternalIngredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            amount: ingredient.amount,
            unit: ingredient.unit.clone(),
        }
    }
}

/// Creation payload accepted by `POST /users/{username}/recipes`
///
/// Absent display fields serialize as `null`, not as missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub image: Option<String>,
    #[serde(rename = "readyInMinutes")]
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub instructions: Vec<InstructionStep>,
    pub ingredients: Vec<Ingredient>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
}

/// Entry of `GET /users/{username}/recipes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecipe {
    #[serde(default, deserialize_with = "deserialize_optional_recipe_id")]
    pub id: Option<RecipeId>,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}
