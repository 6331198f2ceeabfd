/// User recipes service - the user's own recipe collection
///
/// Creation takes a recipe in the search-result shape and rewrites it into the
/// shape the backend stores before posting it.
use super::{dispatch, CallKind};
use crate::api;
use crate::models::{CreatedRecipe, ExternalRecipe, Ingredient, NewRecipe, UserId, UserRecipe};
use crate::state::SessionContext;
use crate::utils::cancel::CancelToken;
use crate::utils::errors::{ServiceError, ServiceResult};
use crate::utils::http::Transport;
use std::sync::Arc;

const OP_LIST: &str = "get_user_recipes";
const OP_CREATE: &str = "create_recipe";

#[derive(Clone)]
pub struct UserRecipesService {
    session: Arc<SessionContext>,
    transport: Arc<dyn Transport>,
}

impl UserRecipesService {
    pub fn new(session: Arc<SessionContext>, transport: Arc<dyn Transport>) -> Self {
        Self { session, transport }
    }

    /// Recipes authored by the session user, in server order
    pub async fn get_user_recipes(
        &self,
        cancel: Option<&CancelToken>,
    ) -> ServiceResult<Vec<UserRecipe>> {
        let recipes = dispatch(
            OP_LIST,
            CallKind::Read,
            api::fetch_user_recipes(self.transport.as_ref(), &self.session),
            cancel,
        )
        .await
        .inspect_err(|e| {
            log::error!(
                "[UserRecipes] Error fetching recipes for {}: {}",
                self.session.username(),
                e
            )
        })?;

        log::info!(
            "[UserRecipes] Fetched {} recipes for {}",
            recipes.len(),
            self.session.username()
        );
        Ok(recipes)
    }

    /// Normalize `recipe` and store it for the session user.
    ///
    /// `user_id` only appears in logs: the endpoint is always keyed by the
    /// session username. Input that fails normalization is rejected before
    /// any request is made.
    pub async fn create_recipe(
        &self,
        user_id: UserId,
        recipe: &ExternalRecipe,
        cancel: Option<&CancelToken>,
    ) -> ServiceResult<CreatedRecipe> {
        let payload = normalize_recipe(recipe).inspect_err(|e| {
            log::error!("[UserRecipes] Rejected recipe for user {}: {}", user_id, e)
        })?;

        log::info!(
            "[UserRecipes] Creating recipe '{}' for user {} ({} steps, {} ingredients)",
            payload.title,
            user_id,
            payload.instructions.len(),
            payload.ingredients.len()
        );

        let body = dispatch(
            OP_CREATE,
            CallKind::Write,
            api::create_recipe(self.transport.as_ref(), &self.session, &payload),
            cancel,
        )
        .await
        .inspect_err(|e| {
            log::error!("[UserRecipes] Error creating recipe for user {}: {}", user_id, e)
        })?;

        let created = CreatedRecipe::from_response(body, recipe);
        match &created {
            CreatedRecipe::Echoed(echoed) => {
                log::info!("[UserRecipes] Created recipe {} (id-only response)", echoed.id)
            }
            CreatedRecipe::Returned(_) => {
                log::info!("[UserRecipes] Created recipe {:?}", created.id())
            }
        }
        Ok(created)
    }
}

/// Rewrite a search-shaped recipe into the backend's persistence shape.
///
/// Only the first instruction group is kept; later groups are dropped.
/// Empty strings and zero counts are treated as absent, and missing dietary
/// flags become `false`.
pub fn normalize_recipe(recipe: &ExternalRecipe) -> ServiceResult<NewRecipe> {
    let first_group = recipe
        .analyzed_instructions
        .first()
        .ok_or_else(|| ServiceError::InvalidInput {
            reason: format!(
                "recipe '{}' has no analyzed instructions",
                recipe.title
            ),
        })?;

    if recipe.analyzed_instructions.len() > 1 {
        log::debug!(
            "[UserRecipes] Dropping {} extra instruction group(s) from '{}'",
            recipe.analyzed_instructions.len() - 1,
            recipe.title
        );
    }

    Ok(NewRecipe {
        title: recipe.title.clone(),
        image: recipe.image.clone().filter(|image| !image.is_empty()),
        ready_in_minutes: recipe.ready_in_minutes.filter(|minutes| *minutes > 0),
        servings: recipe.servings.filter(|servings| *servings > 0),
        instructions: first_group.steps.clone(),
        ingredients: recipe
            .extended_ingredients
            .iter()
            .map(Ingredient::from)
            .collect(),
        is_vegetarian: recipe.vegetarian.unwrap_or(false),
        is_vegan: recipe.vegan.unwrap_or(false),
        is_gluten_free: recipe.gluten_free.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExternalIngredient, InstructionGroup, InstructionStep};
    use serde_json::{json, Map};

    fn group(steps: &[&str]) -> InstructionGroup {
        InstructionGroup {
            name: String::new(),
            steps: steps
                .iter()
                .enumerate()
                .map(|(i, step)| InstructionStep::new(i as u32 + 1, *step))
                .collect(),
        }
    }

    #[test]
    fn keeps_only_first_instruction_group() {
        let recipe = ExternalRecipe {
            title: "Layered Cake".to_string(),
            analyzed_instructions: vec![group(&["Mix.", "Bake."]), group(&["Frost."])],
            ..Default::default()
        };

        let normalized = normalize_recipe(&recipe).unwrap();
        assert_eq!(normalized.instructions, group(&["Mix.", "Bake."]).steps);
    }

    #[test]
    fn dietary_flags_default_to_false() {
        let recipe = ExternalRecipe {
            title: "Salad".to_string(),
            analyzed_instructions: vec![group(&["Toss."])],
            vegetarian: Some(true),
            vegan: None,
            gluten_free: Some(false),
            ..Default::default()
        };

        let normalized = normalize_recipe(&recipe).unwrap();
        assert!(normalized.is_vegetarian);
        assert!(!normalized.is_vegan);
        assert!(!normalized.is_gluten_free);
    }

    #[test]
    fn ingredients_are_projected_to_name_amount_unit() {
        let mut extra = Map::new();
        extra.insert("id".to_string(), json!(20081));
        extra.insert("aisle".to_string(), json!("Baking"));

        let recipe = ExternalRecipe {
            title: "Bread".to_string(),
            analyzed_instructions: vec![group(&["Knead."])],
            extended_ingredients: vec![ExternalIngredient {
                name: "flour".to_string(),
                amount: Some(2.5),
                unit: Some("cups".to_string()),
                extra,
            }],
            ..Default::default()
        };

        let normalized = normalize_recipe(&recipe).unwrap();
        assert_eq!(
            serde_json::to_value(&normalized.ingredients).unwrap(),
            json!([{ "name": "flour", "amount": 2.5, "unit": "cups" }])
        );
    }

    #[test]
    fn blank_display_fields_become_null() {
        let recipe = ExternalRecipe {
            title: "Toast".to_string(),
            image: Some(String::new()),
            ready_in_minutes: Some(0),
            servings: Some(1),
            analyzed_instructions: vec![group(&["Toast it."])],
            ..Default::default()
        };

        let normalized = normalize_recipe(&recipe).unwrap();
        assert_eq!(normalized.image, None);
        assert_eq!(normalized.ready_in_minutes, None);
        assert_eq!(normalized.servings, Some(1));
    }

    #[test]
    fn missing_instructions_is_invalid_input() {
        let recipe = ExternalRecipe {
            title: "Mystery".to_string(),
            ..Default::default()
        };

        let error = normalize_recipe(&recipe).unwrap_err();
        assert!(matches!(error, ServiceError::InvalidInput { .. }));
    }
}
