// User recipe API endpoints
use crate::constants::RECIPES_RESOURCE;
use crate::models::{NewRecipe, UserRecipe};
use crate::state::SessionContext;
use crate::utils::errors::TransportError;
use crate::utils::http::{ApiRequest, Transport};
use serde_json::Value;

/// GET /users/{username}/recipes
pub async fn fetch_user_recipes(
    transport: &dyn Transport,
    session: &SessionContext,
) -> Result<Vec<UserRecipe>, TransportError> {
    let url = session.user_url(RECIPES_RESOURCE);
    log::debug!("[UserRecipes] GET {}", url);

    let body = transport.send(ApiRequest::get(url)).await?;
    super::decode_list(body)
}

/// POST /users/{username}/recipes with the normalized payload
pub async fn create_recipe(
    transport: &dyn Transport,
    session: &SessionContext,
    payload: &NewRecipe,
) -> Result<Option<Value>, TransportError> {
    let url = session.user_url(RECIPES_RESOURCE);
    let body = serde_json::to_value(payload).map_err(|e| TransportError::Encode(e.to_string()))?;
    log::debug!("[UserRecipes] POST {}: {}", url, body);

    transport.send(ApiRequest::post(url, body)).await
}
