use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Backend identifier of a recipe (user-authored or third-party)
pub type RecipeId = u64;

/// One recipe in the user's favorites set
///
/// Only `id` is interpreted; whatever else the backend sends (title, image...)
/// is kept in `details` so views can render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(deserialize_with = "deserialize_recipe_id")]
    pub id: RecipeId,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl FavoriteEntry {
    pub fn new(id: RecipeId) -> Self {
        Self {
            id,
            details: Map::new(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.details.get("title").and_then(Value::as_str)
    }
}

/// Membership test by identifier equality
pub fn contains_recipe(favorites: &[FavoriteEntry], recipe_id: RecipeId) -> bool {
    favorites.iter().any(|entry| entry.id == recipe_id)
}

/// Read a recipe id from either a JSON number or a numeric string
pub(crate) fn recipe_id_from_value(value: &Value) -> Option<RecipeId> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn deserialize_recipe_id<'de, D>(deserializer: D) -> Result<RecipeId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    recipe_id_from_value(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid recipe id: {}", value)))
}

pub(crate) fn deserialize_optional_recipe_id<'de, D>(
    deserializer: D,
) -> Result<Option<RecipeId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => recipe_id_from_value(&value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid recipe id: {}", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_extra_fields_and_accepts_string_ids() {
        let entry: FavoriteEntry =
            serde_json::from_value(json!({ "id": "715538", "title": "Bruschetta" })).unwrap();

        assert_eq!(entry.id, 715538);
        assert_eq!(entry.title(), Some("Bruschetta"));
    }

    #[test]
    fn rejects_non_numeric_id() {
        let result = serde_json::from_value::<FavoriteEntry>(json!({ "id": "abc" }));
        assert!(result.is_err());
    }

    #[test]
    fn membership_is_by_id() {
        let favorites = vec![FavoriteEntry::new(1), FavoriteEntry::new(5)];
        assert!(contains_recipe(&favorites, 5));
        assert!(!contains_recipe(&favorites, 2));
        assert!(!contains_recipe(&[], 1));
    }
}
