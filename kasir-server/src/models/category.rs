//! Category record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Category fields accepted on create and update.
///
/// An `id` in the body is ignored; the path (or the store) decides it.
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
}

impl CategoryInput {
    pub fn into_category(self, id: i64) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}
