use thiserror::Error;

/// Errors that can occur when validating item fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Price must be greater than 0")]
    NonPositivePrice,
    #[error("Price must have at most 2 decimal places, got {0}")]
    TooManyDecimalPlaces(u32),
    #[error("Price is too large to carry 2 decimal places")]
    PriceOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_error_display() {
        assert_eq!(ItemError::EmptyName.to_string(), "Item name cannot be empty");
        assert_eq!(
            ItemError::NonPositivePrice.to_string(),
            "Price must be greater than 0"
        );
        assert_eq!(
            ItemError::TooManyDecimalPlaces(3).to_string(),
            "Price must have at most 2 decimal places, got 3"
        );
        assert_eq!(
            ItemError::PriceOutOfRange.to_string(),
            "Price is too large to carry 2 decimal places"
        );
    }
}
