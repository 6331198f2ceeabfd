//! Application constants and configuration values

// === Configuration (.env / process environment) ===
pub const ENV_SERVER_DOMAIN: &str = "RECIPES_SERVER_DOMAIN";
pub const ENV_USERNAME: &str = "RECIPES_USERNAME";
pub const ENV_SESSION_COOKIE: &str = "RECIPES_SESSION_COOKIE";

// === API endpoints (relative to /users/{username}) ===
pub const FAVORITES_RESOURCE: &str = "favorites";
pub const RECIPES_RESOURCE: &str = "recipes";

// === Payload keys ===
pub const FAVORITE_RECIPE_ID_KEY: &str = "recipeId"; // POST /favorites body
pub const CREATED_RECIPE_ID_KEY: &str = "recipe_id"; // id-only create response
pub const RECIPE_TITLE_KEY: &str = "title";

// === Toast messages ===
pub const FAVORITE_ADDED_MESSAGE: &str = "Added to favorites";
pub const FAVORITE_REMOVED_MESSAGE: &str = "Removed from favorites";

// === Logging ===
pub const DEFAULT_LOG_FILTER: &str = "info";
