// Data models for the recipes API entities

pub mod created;
pub mod favorite;
pub mod recipe;

/// Identifier of the user a recipe is created for
pub type UserId = u64;

// Re-export commonly used types
pub use created::{CreatedRecipe, EchoedRecipe};
pub use favorite::{contains_recipe, FavoriteEntry, RecipeId};
pub use recipe::{
    ExternalIngredient, ExternalRecipe, Ingredient, InstructionGroup, InstructionStep, NewRecipe,
    UserRecipe,
};
