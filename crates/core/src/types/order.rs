//! Past order records shown on the order history page.
//!
//! Orders are read-only: nothing in the storefront creates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{OrderStatus, Price};

/// Customer-facing order number, e.g. `FF-9021`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A past order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderNumber,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub total: Price,
    /// Line labels in display order, e.g. `Shiitake x1`.
    pub items: Vec<String>,
}

impl Order {
    /// Date format used on order cards.
    pub const DATE_FORMAT: &'static str = "%b %d, %Y";

    /// The order date as shown to the customer, e.g. `Oct 12, 2023`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.placed_on.format(Self::DATE_FORMAT).to_string()
    }

    /// The line labels joined for a one-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        self.items.join(", ")
    }
}
