// Recipes API endpoint modules

pub mod favorites;
pub mod recipes;

use crate::utils::errors::TransportError;
use serde::de::DeserializeOwned;
use serde_json::Value;

// Re-export commonly used functions
pub use favorites::{add_favorite, fetch_favorites, remove_favorite};
pub use recipes::{create_recipe, fetch_user_recipes};

/// Decode a collection body; an absent or `null` body is an empty collection.
///
/// Entries are decoded one at a time and malformed ones are skipped with a
/// warning, so a single bad record never hides the rest of the list. A body
/// that is not an array at all is a decode error.
pub(crate) fn decode_list<T: DeserializeOwned>(
    body: Option<Value>,
) -> Result<Vec<T>, TransportError> {
    let entries = match body {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(TransportError::Decode(format!(
                "expected a JSON array, got {}",
                other
            )))
        }
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("[Api] Skipping malformed entry {}: {}", index, e);
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::decode_list;
    use crate::models::FavoriteEntry;
    use serde_json::{json, Value};

    #[test]
    fn absent_and_null_bodies_are_empty() {
        assert!(decode_list::<FavoriteEntry>(None).unwrap().is_empty());
        assert!(decode_list::<FavoriteEntry>(Some(Value::Null)).unwrap().is_empty());
        assert!(decode_list::<FavoriteEntry>(Some(json!([]))).unwrap().is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let favorites = decode_list::<FavoriteEntry>(Some(json!([
            { "id": 42 },
            { "id": null, "title": "x" },
            { "title": "no id" },
            { "id": "7" }
        ])))
        .unwrap();

        let ids: Vec<u64> = favorites.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![42, 7]);
    }

    #[test]
    fn object_body_is_a_decode_error() {
        let result = decode_list::<FavoriteEntry>(Some(json!({ "id": 1 })));
        assert!(result.is_err());
    }
}
