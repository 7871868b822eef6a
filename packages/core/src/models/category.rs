//! Category model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A question category. The display name is serialized as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// `id -> type` mapping used by the `categories` response field.
///
/// Ordered by id; serde_json writes the integer keys as decimal strings.
pub type CategoryMap = BTreeMap<i64, String>;

/// Build the id-ordered mapping from a list of categories
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
