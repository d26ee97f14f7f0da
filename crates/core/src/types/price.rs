//! Type-safe price representation.
//!
//! The farm prices everything in whole rupees, so a price is an integer count
//! of currency units with no fractional part.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A price in whole rupees.
///
/// ```
/// use fungi_fresh_core::Price;
///
/// let total: Price = [Price::new(180), Price::new(150)].into_iter().sum();
/// assert_eq!(total, Price::new(330));
/// assert_eq!(total.to_string(), "₹330");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    /// A price of nothing.
    pub const ZERO: Self = Self(0);

    /// Currency symbol shown in front of every amount.
    pub const SYMBOL: &'static str = "₹";

    /// Create a new price from whole rupees.
    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Get the amount in whole rupees.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::SYMBOL, self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_rupee_symbol() {
        assert_eq!(Price::new(450).to_string(), "₹450");
        assert_eq!(Price::ZERO.to_string(), "₹0");
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Price = Vec::<Price>::new().into_iter().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_sum_by_reference() {
        let prices = [Price::new(120), Price::new(140), Price::new(250)];
        let total: Price = prices.iter().sum();
        assert_eq!(total.amount(), 510);
    }

    #[test]
    fn test_add_saturates() {
        assert_eq!(Price::new(u32::MAX) + Price::new(1), Price::new(u32::MAX));
    }
}
