use super::error::ItemError;
use super::types::Item;

/// Validates the invariants every stored item must hold.
///
/// Payload deserialization already enforces these; this re-checks an
/// assembled `Item`, e.g. one built in code rather than parsed. The price
/// needs no check here since a [`Price`](super::Price) cannot be
/// constructed out of range.
pub fn validate_item(item: &Item) -> Result<(), ItemError> {
    if item.name.trim().is_empty() {
        return Err(ItemError::EmptyName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Price;
    use rust_decimal::Decimal;

    fn price(cents: i64) -> Price {
        Price::new(Decimal::new(cents, 2)).unwrap()
    }

    #[test]
    fn test_valid_item() {
        let item = Item::new("Pen", price(150));
        assert_eq!(validate_item(&item), Ok(()));
    }

    #[test]
    fn test_blank_name_is_invalid() {
        let item = Item::new("  ", price(150));
        assert_eq!(validate_item(&item), Err(ItemError::EmptyName));
    }
}
