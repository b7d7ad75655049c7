use catalog_core::item::{CreateItemRequest, Price};
use rust_decimal::Decimal;

/// Generates demo items for local development.
pub fn demo_items() -> Vec<CreateItemRequest> {
    // Amounts are in cents.
    let price = |cents: i64| Price::new(Decimal::new(cents, 2));

    [
        ("Ballpoint Pen", Some("Blue ink, medium point"), 150),
        ("Pencil", None, 99),
        ("Notebook", Some("A5, 80 sheets, dotted"), 450),
        ("Stapler", None, 1299),
        ("Desk Lamp", Some("LED, adjustable arm"), 3499),
    ]
    .into_iter()
    .filter_map(|(name, description, cents)| {
        let request = CreateItemRequest::new(name, price(cents).ok()?);
        Some(match description {
            Some(description) => request.with_description(description),
            None => request,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::item::validate_item;

    #[test]
    fn test_demo_items_are_valid() {
        let items = demo_items();

        assert_eq!(items.len(), 5);
        for request in items {
            assert_eq!(validate_item(&request.into_item()), Ok(()));
        }
    }
}
