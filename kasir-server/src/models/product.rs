//! Product record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sellable product.
///
/// `category_name` is filled by read queries that join `categories`; it is
/// omitted from JSON when the product has no category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// Product fields accepted on create and update. Missing fields decode as
/// zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_name_skipped_when_absent() {
        let product = Product {
            id: 1,
            name: "Indomie".into(),
            price: 3500,
            stock: 40,
            category_id: None,
            category_name: None,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("category_name").is_none());
        assert_eq!(json["category_id"], serde_json::Value::Null);
    }

    #[test]
    fn input_missing_fields_are_zero() {
        let input: ProductInput = serde_json::from_str(r#"{"name": "Gula"}"#).unwrap();
        assert_eq!(input.price, 0);
        assert_eq!(input.stock, 0);
        assert_eq!(input.category_id, None);
    }
}
