//! Frontend Models
//!
//! Data structures matching the items endpoint.

use serde::{Deserialize, Serialize};

/// Catalog item (matches the server's JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    /// Server-side soft-delete flag; list responses filter on it and may omit it
    #[serde(default)]
    pub deleted: bool,
}

/// Item fields sent on create/update (the server assigns ids)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemFields {
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_without_deleted_flag() {
        let json = r#"[{"id":1,"name":"Cup","price":500,"image":"x.jpg","category":"kitchen"}]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "Cup");
        assert_eq!(items[0].price, 500.0);
        assert_eq!(items[0].image, "x.jpg");
        assert_eq!(items[0].category, "kitchen");
        assert!(!items[0].deleted);
    }

    #[test]
    fn test_item_deserializes_deleted_flag_when_present() {
        let json = r#"{"id":2,"name":"Mug","price":250.5,"image":"m.jpg","category":"kitchen","deleted":true}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert!(item.deleted);
        assert_eq!(item.price, 250.5);
    }

    #[test]
    fn test_item_fields_serialize_without_id() {
        let fields = ItemFields {
            name: "Cup".to_string(),
            price: 500.0,
            image: "x.jpg".to_string(),
            category: "kitchen".to_string(),
        };
        let json = serde_json::to_value(&fields).unwrap();

        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Cup");
        assert_eq!(json["price"], 500.0);
        assert_eq!(json["category"], "kitchen");
    }
}
