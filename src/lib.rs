//! Recipe & favorites synchronization layer for the recipes web app.
//!
//! Views call [`FavoritesService`] and [`UserRecipesService`]; both build their
//! endpoints from an injected [`SessionContext`] and talk to the backend through
//! a [`Transport`] ([`HttpTransport`] in the app, fakes in tests).

pub mod api;
pub mod constants;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use models::{
    CreatedRecipe, EchoedRecipe, ExternalRecipe, FavoriteEntry, NewRecipe, RecipeId, UserId,
    UserRecipe,
};
pub use services::{normalize_recipe, FavoriteToggle, FavoritesService, UserRecipesService};
pub use state::SessionContext;
pub use utils::{
    ApiRequest, CancelToken, ConfigError, HttpTransport, ServiceError, ServiceResult, Transport,
    TransportError,
};
