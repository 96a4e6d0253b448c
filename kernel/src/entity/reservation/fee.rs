use std::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use vodca::AsRefln;

/// Monetary amount with exactly two fractional digits, rounded half-up on
/// construction.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, AsRefln)]
pub struct Fee(Decimal);

impl Fee {
    pub fn new(amount: impl Into<Decimal>) -> Self {
        let mut rounded = amount
            .into()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        Self(rounded)
    }

    pub fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }
}

impl Add for Fee {
    type Output = Fee;

    // Both sides already carry two digits, so the sum needs no re-rounding.
    fn add(self, rhs: Fee) -> Fee {
        Fee(self.0 + rhs.0)
    }
}
