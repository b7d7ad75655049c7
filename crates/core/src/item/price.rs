use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ItemError;

/// Number of decimal places every accepted price carries.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// A strictly positive amount quantized to two decimal places.
///
/// The only way to obtain a `Price` is through [`Price::new`], which also
/// runs during deserialization. A payload carrying `0`, a negative amount,
/// or more than two significant decimal places fails to deserialize.
///
/// Serializes as a JSON string (`"1.50"`) so the two-place scale survives
/// the round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Validates `amount` and rescales it to exactly two decimal places.
    ///
    /// Trailing zeros do not count against the precision limit: `1.500`
    /// is accepted as `1.50`, while `1.505` is rejected.
    pub fn new(amount: Decimal) -> Result<Self, ItemError> {
        if amount <= Decimal::ZERO {
            return Err(ItemError::NonPositivePrice);
        }

        let scale = amount.normalize().scale();
        if scale > PRICE_DECIMAL_PLACES {
            return Err(ItemError::TooManyDecimalPlaces(scale));
        }

        // `rescale` silently keeps a smaller scale when the amount has too
        // many integer digits to fit two places.
        let mut quantized = amount;
        quantized.rescale(PRICE_DECIMAL_PLACES);
        if quantized.scale() != PRICE_DECIMAL_PLACES {
            return Err(ItemError::PriceOutOfRange);
        }

        Ok(Self(quantized))
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = ItemError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
