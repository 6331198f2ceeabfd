/// Services module - business logic layer
///
/// Services turn UI actions into single API calls, shape the results and tag
/// failures so views only have to render them (usually as a toast).
pub mod favorites;
pub mod user_recipes;

use crate::utils::cancel::{run_cancellable, CancelToken};
use crate::utils::errors::{ServiceError, ServiceResult, TransportError};
use std::future::Future;

// Re-export commonly used types
pub use favorites::{FavoriteToggle, FavoritesService};
pub use user_recipes::{normalize_recipe, UserRecipesService};

/// Which error tag a failed transport call gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallKind {
    Read,
    Write,
}

/// Await one transport call under the caller's cancel token and tag its failure
pub(crate) async fn dispatch<T, F>(
    operation: &'static str,
    kind: CallKind,
    request: F,
    cancel: Option<&CancelToken>,
) -> ServiceResult<T>
where
    F: Future<Output = Result<T, TransportError>>,
{
    match run_cancellable(request, cancel).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(match kind {
            CallKind::Read => ServiceError::Fetch { operation, source },
            CallKind::Write => ServiceError::Write { operation, source },
        }),
        Err(_) => Err(ServiceError::Cancelled { operation }),
    }
}
