//! Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amounts::line_total;

/// A single basket position.
///
/// Serializes to the cart entry shape the loyalty service expects:
/// `{nid, groupId, groupName, name, price, priceWithDiscount, amount}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within a basket.
    #[serde(rename = "nid")]
    pub product_id: String,

    /// Product group identifier.
    #[serde(rename = "groupId", default)]
    pub group_id: String,

    /// Product group name.
    #[serde(rename = "groupName", default)]
    pub group_name: String,

    /// Product name.
    pub name: String,

    /// Price of one unit.
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,

    /// Price of one unit after discounts.
    #[serde(rename = "priceWithDiscount", with = "rust_decimal::serde::float")]
    pub unit_price_discounted: Decimal,

    /// Number of units, fractional for weighed goods.
    #[serde(rename = "amount", with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
}

impl LineItem {
    /// Creates a new line item without a product group.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        unit_price_discounted: Decimal,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            group_id: String::new(),
            group_name: String::new(),
            name: name.into(),
            unit_price,
            unit_price_discounted,
            quantity,
        }
    }

    /// Assigns the product group.
    #[must_use]
    pub fn with_group(
        mut self,
        group_id: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Self {
        self.group_id = group_id.into();
        self.group_name = group_name.into();
        self
    }

    /// Full price of the position, rounded to two places.
    pub fn total(&self) -> Decimal {
        line_total(self.quantity, self.unit_price)
    }

    /// Discounted price of the position, rounded to two places.
    pub fn total_discounted(&self) -> Decimal {
        line_total(self.quantity, self.unit_price_discounted)
    }
}
