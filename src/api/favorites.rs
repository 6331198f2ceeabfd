// Favorites API endpoints
use crate::constants::{FAVORITES_RESOURCE, FAVORITE_RECIPE_ID_KEY};
use crate::models::{FavoriteEntry, RecipeId};
use crate::state::SessionContext;
use crate::utils::errors::TransportError;
use crate::utils::http::{ApiRequest, Transport};
use serde_json::{json, Value};

/// GET /users/{username}/favorites
pub async fn fetch_favorites(
    transport: &dyn Transport,
    session: &SessionContext,
) -> Result<Vec<FavoriteEntry>, TransportError> {
    let url = session.user_url(FAVORITES_RESOURCE);
    log::debug!("[Favorites] GET {}", url);

    let body = transport.send(ApiRequest::get(url)).await?;
    super::decode_list(body)
}

/// POST /users/{username}/favorites with `{ "recipeId": id }`
pub async fn add_favorite(
    transport: &dyn Transport,
    session: &SessionContext,
    recipe_id: RecipeId,
) -> Result<Option<Value>, TransportError> {
    let url = session.user_url(FAVORITES_RESOURCE);
    log::debug!("[Favorites] POST {} (recipe {})", url, recipe_id);

    transport
        .send(ApiRequest::post(url, json!({ (FAVORITE_RECIPE_ID_KEY): recipe_id })))
        .await
}

/// DELETE /users/{username}/favorites/{recipeId}
pub async fn remove_favorite(
    transport: &dyn Transport,
    session: &SessionContext,
    recipe_id: RecipeId,
) -> Result<Option<Value>, TransportError> {
    let url = format!("{}/{}", session.user_url(FAVORITES_RESOURCE), recipe_id);
    log::debug!("[Favorites] DELETE {}", url);

    transport.send(ApiRequest::delete(url)).await
}
