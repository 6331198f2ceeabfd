use clap::{Parser, Subcommand};
use recipe_sync::constants::DEFAULT_LOG_FILTER;
use recipe_sync::{
    CancelToken, ExternalRecipe, FavoritesService, HttpTransport, RecipeId, ServiceError,
    SessionContext, Transport, UserId, UserRecipesService,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

// App version and metadata
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "recipe-sync";

/// Command-line access to a user's favorites and recipes
///
/// Reads RECIPES_SERVER_DOMAIN, RECIPES_USERNAME and (optionally)
/// RECIPES_SESSION_COOKIE from the environment or a .env file.
#[derive(Debug, Parser)]
#[command(name = APP_NAME, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage the favorites set
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// Manage the user's own recipes
    #[command(subcommand)]
    Recipes(RecipesCommand),
}

#[derive(Debug, Subcommand)]
enum FavoritesCommand {
    List,
    Add { recipe_id: RecipeId },
    Remove { recipe_id: RecipeId },
    Check { recipe_id: RecipeId },
}

#[derive(Debug, Subcommand)]
enum RecipesCommand {
    List,
    /// Create a recipe from a JSON file in the recipe-search shape
    Create {
        file: PathBuf,
        #[arg(long, default_value_t = 0)]
        user_id: UserId,
    },
}

fn main() -> ExitCode {
    // Set RUST_LOG=debug for request/response tracing
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    let cli = Cli::parse();

    let session = match SessionContext::from_env() {
        Ok(session) => Arc::new(session),
        Err(e) => {
            log::error!("[Main] Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let transport: Arc<dyn Transport> = match HttpTransport::new(&session) {
        Ok(transport) => Arc::new(transport),
        Err(e) => {
            log::error!("[Main] Failed to set up HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // single-threaded: the CLI issues one request at a time
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("[Main] Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let cancel = CancelToken::new();
    let result = runtime.block_on(async {
        let on_ctrl_c = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("[Main] Interrupted, cancelling request");
                on_ctrl_c.cancel();
            }
        });

        run(cli.command, session, transport, &cancel).await
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e.user_message();
            log::error!("[Main] {}", e);
            eprintln!("{}: {}", message.title, message.body);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Command,
    session: Arc<SessionContext>,
    transport: Arc<dyn Transport>,
    cancel: &CancelToken,
) -> Result<(), ServiceError> {
    match command {
        Command::Favorites(command) => {
            let favorites = FavoritesService::new(session, transport);
            match command {
                FavoritesCommand::List => print_json(&favorites.get_favorites(Some(cancel)).await?),
                FavoritesCommand::Add { recipe_id } => {
                    print_json(&favorites.add_to_favorites(recipe_id, Some(cancel)).await?)
                }
                FavoritesCommand::Remove { recipe_id } => {
                    print_json(&favorites.remove_from_favorites(recipe_id, Some(cancel)).await?)
                }
                FavoritesCommand::Check { recipe_id } => print_json(
                    &favorites
                        .is_in_favorites(recipe_id, None, Some(cancel))
                        .await,
                ),
            }
        }
        Command::Recipes(command) => {
            let recipes = UserRecipesService::new(session, transport);
            match command {
                RecipesCommand::List => print_json(&recipes.get_user_recipes(Some(cancel)).await?),
                RecipesCommand::Create { file, user_id } => {
                    let recipe = read_recipe(&file)?;
                    print_json(&recipes.create_recipe(user_id, &recipe, Some(cancel)).await?)
                }
            }
        }
    }
    Ok(())
}

fn read_recipe(file: &Path) -> Result<ExternalRecipe, ServiceError> {
    let text = std::fs::read_to_string(file).map_err(|e| ServiceError::InvalidInput {
        reason: format!("cannot read {}: {}", file.display(), e),
    })?;
    serde_json::from_str(&text).map_err(|e| ServiceError::InvalidInput {
        reason: format!("{} is not a valid recipe: {}", file.display(), e),
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => log::error!("[Main] Failed to render output: {}", e),
    }
}
