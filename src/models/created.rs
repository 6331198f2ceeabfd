use super::favorite::{recipe_id_from_value, RecipeId};
use super::recipe::ExternalRecipe;
use crate::constants::{CREATED_RECIPE_ID_KEY, RECIPE_TITLE_KEY};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a successful recipe creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedRecipe {
    /// Backend replied with only `recipe_id`; display data comes from the submission
    Echoed(EchoedRecipe),
    /// Backend replied with a full body, passed through unmodified
    Returned(Value),
}

/// Server-assigned identity merged with the fields the caller submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoedRecipe {
    pub id: RecipeId,
    #[serde(rename = "recipe_id")]
    pub recipe_id: RecipeId,
    pub title: String,
    pub image: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub vegetarian: Option<bool>,
    pub vegan: Option<bool>,
    pub gluten_free: Option<bool>,
}

impl EchoedRecipe {
    pub fn new(recipe_id: RecipeId, submitted: &ExternalRecipe) -> Self {
        Self {
            id: recipe_id,
            recipe_id,
            title: submitted.title.clone(),
            image: submitted.image.clone(),
            ready_in_minutes: submitted.ready_in_minutes,
            servings: submitted.servings,
            vegetarian: submitted.vegetarian,
            vegan: submitted.vegan,
            gluten_free: submitted.gluten_free,
        }
    }
}

impl CreatedRecipe {
    /// Shape the create response.
    ///
    /// An object carrying a truthy `recipe_id` and no `title` is an id-only
    /// acknowledgement and gets echoed; anything else is returned as-is
    /// (an absent body becomes `Value::Null`).
    pub fn from_response(body: Option<Value>, submitted: &ExternalRecipe) -> Self {
        let body = body.unwrap_or(Value::Null);

        let echoed_id = body.as_object().and_then(|object| {
            if object.contains_key(RECIPE_TITLE_KEY) {
                return None;
            }
            object
                .get(CREATED_RECIPE_ID_KEY)
                .and_then(recipe_id_from_value)
                .filter(|id| *id != 0)
        });

        match echoed_id {
            Some(id) => CreatedRecipe::Echoed(EchoedRecipe::new(id, submitted)),
            None => CreatedRecipe::Returned(body),
        }
    }

    /// Identifier of the created recipe, when one can be read
    pub fn id(&self) -> Option<RecipeId> {
        match self {
            CreatedRecipe::Echoed(recipe) => Some(recipe.id),
            CreatedRecipe::Returned(body) => ["id", CREATED_RECIPE_ID_KEY]
                .iter()
                .find_map(|key| body.get(*key).and_then(recipe_id_from_value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn soup() -> ExternalRecipe {
        ExternalRecipe {
            title: "Soup".to_string(),
            servings: Some(4),
            vegetarian: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn id_only_response_is_echoed_with_submitted_fields() {
        let created = CreatedRecipe::from_response(Some(json!({ "recipe_id": 42 })), &soup());

        assert_eq!(created.id(), Some(42));
        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            json!({
                "id": 42,
                "recipe_id": 42,
                "title": "Soup",
                "image": null,
                "readyInMinutes": null,
                "servings": 4,
                "vegetarian": true,
                "vegan": null,
                "glutenFree": null
            })
        );
    }

    #[test]
    fn full_body_is_returned_unmodified() {
        let body = json!({ "recipe_id": 7, "title": "Server Soup", "servings": 6 });
        let created = CreatedRecipe::from_response(Some(body.clone()), &soup());

        assert_eq!(created, CreatedRecipe::Returned(body));
        assert_eq!(created.id(), Some(7));
    }

    #[test]
    fn zero_or_missing_recipe_id_is_not_echoed() {
        let zero = CreatedRecipe::from_response(Some(json!({ "recipe_id": 0 })), &soup());
        assert_eq!(zero, CreatedRecipe::Returned(json!({ "recipe_id": 0 })));

        let empty = CreatedRecipe::from_response(None, &soup());
        assert_eq!(empty, CreatedRecipe::Returned(Value::Null));
        assert_eq!(empty.id(), None);
    }
}
