/// Favorites service - reads and writes the user's favorite-recipe set
///
/// Nothing is cached between calls: every `get_favorites` is a fresh fetch.
/// Views that already hold a fetched list pass it to `is_in_favorites` to
/// skip the round trip.
use super::{dispatch, CallKind};
use crate::api;
use crate::constants::{FAVORITE_ADDED_MESSAGE, FAVORITE_REMOVED_MESSAGE};
use crate::models::{contains_recipe, FavoriteEntry, RecipeId};
use crate::state::SessionContext;
use crate::utils::cancel::CancelToken;
use crate::utils::errors::ServiceResult;
use crate::utils::http::Transport;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

const OP_GET: &str = "get_favorites";
const OP_ADD: &str = "add_to_favorites";
const OP_REMOVE: &str = "remove_from_favorites";

/// Result of a toggle (for UI updates)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub is_favorite: bool,
    pub message: &'static str,
}

#[derive(Clone)]
pub struct FavoritesService {
    session: Arc<SessionContext>,
    transport: Arc<dyn Transport>,
}

impl FavoritesService {
    pub fn new(session: Arc<SessionContext>, transport: Arc<dyn Transport>) -> Self {
        Self { session, transport }
    }

    /// Fetch the full favorites collection for the session user.
    ///
    /// An empty or absent body yields an empty vector.
    pub async fn get_favorites(
        &self,
        cancel: Option<&CancelToken>,
    ) -> ServiceResult<Vec<FavoriteEntry>> {
        let favorites = dispatch(
            OP_GET,
            CallKind::Read,
            api::fetch_favorites(self.transport.as_ref(), &self.session),
            cancel,
        )
        .await
        .inspect_err(|e| {
            log::error!(
                "[Favorites] Error fetching favorites for {}: {}",
                self.session.username(),
                e
            )
        })?;

        log::info!(
            "[Favorites] Fetched {} favorites for {}",
            favorites.len(),
            self.session.username()
        );
        Ok(favorites)
    }

    /// Add a recipe to the favorites set; returns the server body as-is
    pub async fn add_to_favorites(
        &self,
        recipe_id: RecipeId,
        cancel: Option<&CancelToken>,
    ) -> ServiceResult<Option<Value>> {
        log::info!("[Favorites] Adding recipe {}", recipe_id);

        dispatch(
            OP_ADD,
            CallKind::Write,
            api::add_favorite(self.transport.as_ref(), &self.session, recipe_id),
            cancel,
        )
        .await
        .inspect_err(|e| {
            log::error!("[Favorites] Error adding recipe {} to favorites: {}", recipe_id, e)
        })
    }

    /// Remove a recipe from the favorites set; the server decides whether it was there
    pub async fn remove_from_favorites(
        &self,
        recipe_id: RecipeId,
        cancel: Option<&CancelToken>,
    ) -> ServiceResult<Option<Value>> {
        log::info!("[Favorites] Removing recipe {}", recipe_id);

        dispatch(
            OP_REMOVE,
            CallKind::Write,
            api::remove_favorite(self.transport.as_ref(), &self.session, recipe_id),
            cancel,
        )
        .await
        .inspect_err(|e| {
            log::error!(
                "[Favorites] Error removing recipe {} from favorites: {}",
                recipe_id,
                e
            )
        })
    }

    /// Whether `recipe_id` is favorited.
    ///
    /// With a `favorites` snapshot this is a local lookup and never touches the
    /// network. Without one, the set is fetched first. This never fails: any
    /// error on the fetch path (cancellation included) is logged and reported
    /// as "not favorited" so a favorite toggle never blocks on it.
    pub async fn is_in_favorites(
        &self,
        recipe_id: RecipeId,
        favorites: Option<&[FavoriteEntry]>,
        cancel: Option<&CancelToken>,
    ) -> bool {
        if let Some(favorites) = favorites {
            log::debug!(
                "[Favorites] Checking recipe {} against {} cached favorites",
                recipe_id,
                favorites.len()
            );
            return contains_recipe(favorites, recipe_id);
        }

        match self.get_favorites(cancel).await {
            Ok(favorites) => contains_recipe(&favorites, recipe_id),
            Err(e) => {
                log::error!(
                    "[Favorites] Error checking if recipe {} is in favorites: {}",
                    recipe_id,
                    e
                );
                false
            }
        }
    }

    /// Flip the favorite state of `recipe_id` as seen in `favorite_ids`.
    ///
    /// `favorite_ids` is only updated after the server accepted the write, so
    /// on error the caller's view still matches the backend.
    pub async fn toggle_favorite(
        &self,
        recipe_id: RecipeId,
        favorite_ids: &mut HashSet<RecipeId>,
        cancel: Option<&CancelToken>,
    ) -> ServiceResult<FavoriteToggle> {
        if favorite_ids.contains(&recipe_id) {
            self.remove_from_favorites(recipe_id, cancel).await?;
            favorite_ids.remove(&recipe_id);
            Ok(FavoriteToggle {
                is_favorite: false,
                message: FAVORITE_REMOVED_MESSAGE,
            })
        } else {
            self.add_to_favorites(recipe_id, cancel).await?;
            favorite_ids.insert(recipe_id);
            Ok(FavoriteToggle {
                is_favorite: true,
                message: FAVORITE_ADDED_MESSAGE,
            })
        }
    }
}
