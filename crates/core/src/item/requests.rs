//! API request types for item operations.
//!
//! Field validation runs while these payloads are deserialized (see
//! [`crate::serde`] and [`Price`]), so a constructed request is always
//! valid and the repository never re-validates it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::patch::Patch;
use super::price::Price;
use super::types::Item;
use crate::serde::{deserialize_item_name, deserialize_non_null, deserialize_optional_item_name};

/// Request payload for creating a new item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(deserialize_with = "deserialize_item_name")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
}

impl CreateItemRequest {
    /// Create a new request with a name and price.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
        }
    }

    /// Set the item description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Convert into an Item with a freshly generated ID.
    pub fn into_item(self) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// Request payload for replacing an existing item.
///
/// Carries every mutable field; the ID comes from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceItemRequest {
    #[serde(deserialize_with = "deserialize_item_name")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
}

impl ReplaceItemRequest {
    /// Create a new request with a name and price.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
        }
    }

    /// Set the item description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Convert into an Item that keeps the given ID.
    ///
    /// Every other field is taken from the request; an omitted description
    /// ends up cleared.
    pub fn into_item(self, id: Uuid) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// Request payload for partially updating an item.
///
/// Only fields present in the payload are applied. `description` may be
/// explicitly set to `null` to clear it; `name` and `price` are not
/// nullable and reject `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_item_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub description: Patch<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Price>,
}

impl UpdateItemRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the item description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Patch::Value(description.into());
        self
    }

    /// Clear the item description.
    pub fn clear_description(mut self) -> Self {
        self.description = Patch::Null;
        self
    }

    /// Set the item price.
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Returns true if applying this request would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_unset() && self.price.is_none()
    }

    /// Apply updates to an existing item. The ID is never touched.
    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        self.description.apply_to(&mut item.description);
        if let Some(price) = self.price {
            item.price = price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn price(cents: i64) -> Price {
        Price::new(Decimal::new(cents, 2)).unwrap()
    }

    #[test]
    fn test_create_request_into_item() {
        let request = CreateItemRequest::new("Pen", price(150)).with_description("Blue ink");

        let item = request.into_item();

        assert_eq!(item.name, "Pen");
        assert_eq!(item.description.as_deref(), Some("Blue ink"));
        assert_eq!(item.price, price(150));
    }

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"name": "Pen", "price": 1.5}"#;
        let request: CreateItemRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name, "Pen");
        assert_eq!(request.description, None);
        assert_eq!(request.price, price(150));
    }

    #[test]
    fn test_create_request_rejects_invalid_fields() {
        let cases = [
            r#"{"price": "1.50"}"#,
            r#"{"name": "", "price": "1.50"}"#,
            r#"{"name": "Pen"}"#,
            r#"{"name": "Pen", "price": "0"}"#,
            r#"{"name": "Pen", "price": "-1.00"}"#,
            r#"{"name": "Pen", "price": "1.001"}"#,
        ];

        for json in cases {
            let result: Result<CreateItemRequest, _> = serde_json::from_str(json);
            assert!(result.is_err(), "expected {json} to be rejected");
        }
    }

    #[test]
    fn test_create_request_ignores_client_supplied_id() {
        let json = r#"{"id": "00000000-0000-0000-0000-000000000001", "name": "Pen", "price": "1.50"}"#;
        let request: CreateItemRequest = serde_json::from_str(json).unwrap();

        let item = request.into_item();

        assert_ne!(item.id.to_string(), "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn test_replace_request_keeps_id_and_clears_description() {
        let original = Item::new("Pen", price(150)).with_description("Blue ink");

        let replaced = ReplaceItemRequest::new("Pencil", price(99)).into_item(original.id);

        assert_eq!(replaced.id, original.id);
        assert_eq!(replaced.name, "Pencil");
        assert_eq!(replaced.description, None);
        assert_eq!(replaced.price, price(99));
    }

    #[test]
    fn test_update_request_deserialize_distinguishes_absent_and_null() {
        let absent: UpdateItemRequest = serde_json::from_str(r#"{"price": "2.00"}"#).unwrap();
        assert_eq!(absent.description, Patch::Unset);
        assert_eq!(absent.name, None);
        assert_eq!(absent.price, Some(price(200)));

        let cleared: UpdateItemRequest =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, Patch::Null);
    }

    #[test]
    fn test_update_request_rejects_null_for_required_fields() {
        assert!(serde_json::from_str::<UpdateItemRequest>(r#"{"name": null}"#).is_err());
        assert!(serde_json::from_str::<UpdateItemRequest>(r#"{"price": null}"#).is_err());
    }

    #[test]
    fn test_update_request_validates_supplied_fields() {
        assert!(serde_json::from_str::<UpdateItemRequest>(r#"{"name": " "}"#).is_err());
        assert!(serde_json::from_str::<UpdateItemRequest>(r#"{"price": "0.00"}"#).is_err());
        assert!(serde_json::from_str::<UpdateItemRequest>(r#"{"price": "3.141"}"#).is_err());
    }

    #[test]
    fn test_update_apply_only_name() {
        let mut item = Item::new("Pen", price(150)).with_description("Blue ink");
        let id = item.id;

        UpdateItemRequest::new().with_name("X").apply_to(&mut item);

        assert_eq!(item.id, id);
        assert_eq!(item.name, "X");
        assert_eq!(item.description.as_deref(), Some("Blue ink"));
        assert_eq!(item.price, price(150));
    }

    #[test]
    fn test_update_apply_clears_description() {
        let mut item = Item::new("Pen", price(150)).with_description("Blue ink");

        UpdateItemRequest::new()
            .clear_description()
            .apply_to(&mut item);

        assert_eq!(item.description, None);
        assert_eq!(item.name, "Pen");
    }

    #[test]
    fn test_update_is_empty() {
        assert!(UpdateItemRequest::new().is_empty());
        assert!(!UpdateItemRequest::new().clear_description().is_empty());
        assert!(!UpdateItemRequest::new().with_price(price(100)).is_empty());
    }

    #[test]
    fn test_update_request_serialize_skips_unset_fields() {
        let request = UpdateItemRequest::new().with_name("Pencil");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"name":"Pencil"}"#
        );
    }
}
