//! # Shopping List Item Model
//!
//! The single entity this service exposes. The hosted store owns the
//! authoritative record and assigns `id`; the API layer never does.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One persisted shopping list row.
///
/// `id` is store-assigned and immutable; every other field is writable
/// and nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: i64,
    pub name: Option<String>,
    pub category: Option<String>,
    /// Decimal-as-text or numeric; carried through untouched.
    pub price: Option<Value>,
    /// Text or numeric; carried through untouched.
    pub quantity: Option<Value>,
    /// ISO date string; the default sort key for listing.
    #[serde(rename = "expiryDate")]
    pub expiry_date: Option<String>,
}

impl ShoppingListItem {
    /// Combine a store-assigned id with a set of writable fields.
    pub fn from_fields(id: i64, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            price: fields.price,
            quantity: fields.quantity,
            expiry_date: fields.expiry_date,
        }
    }
}

/// The five writable fields of an item.
///
/// No required-field validation is performed: absent fields deserialize to
/// `None` and serialize back as explicit `null`, so a full overwrite clears
/// columns the request omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Value>,
    pub quantity: Option<Value>,
    #[serde(rename = "expiryDate")]
    pub expiry_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_deserialize_with_absent_fields() {
        let fields: ItemFields = serde_json::from_value(json!({
            "name": "basil",
            "expiryDate": "2024-10-17"
        }))
        .unwrap();

        assert_eq!(fields.name.as_deref(), Some("basil"));
        assert_eq!(fields.expiry_date.as_deref(), Some("2024-10-17"));
        assert!(fields.category.is_none());
        assert!(fields.price.is_none());
    }

    #[test]
    fn test_fields_serialize_absent_as_null() {
        let fields = ItemFields {
            name: Some("basil".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["name"], "basil");
        assert_eq!(json["category"], Value::Null);
        assert_eq!(json["quantity"], Value::Null);
        assert_eq!(json["expiryDate"], Value::Null);
    }

    #[test]
    fn test_price_accepts_text_or_number() {
        let as_text: ItemFields = serde_json::from_value(json!({"price": "1.00"})).unwrap();
        let as_number: ItemFields = serde_json::from_value(json!({"price": 1.0})).unwrap();

        assert_eq!(as_text.price, Some(json!("1.00")));
        assert_eq!(as_number.price, Some(json!(1.0)));
    }

    #[test]
    fn test_item_round_trips_rename() {
        let item = ShoppingListItem::from_fields(
            7,
            ItemFields {
                expiry_date: Some("2024-06-01".to_string()),
                ..Default::default()
            },
        );

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["expiryDate"], "2024-06-01");
    }
}
