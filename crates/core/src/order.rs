//! Orders
//!
//! An [`Order`] freezes a [`Basket`] together with transaction metadata into the payload the
//! loyalty service accepts when recording, updating or returning a transaction.

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{amounts::round_amount, basket::Basket, items::LineItem};

/// Format of transaction dates on the wire.
pub const TRANSACTION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Bonus and deposit movements recorded with a transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrderAdjustments {
    /// Bonuses credited to the client.
    pub bonus_add: Decimal,

    /// Bonuses spent by the client.
    pub bonus_write_off: Decimal,

    /// Deposit top-up.
    pub deposit_add: Decimal,

    /// Deposit spent by the client.
    pub deposit_write_off: Decimal,
}

impl OrderAdjustments {
    fn rounded(self) -> Self {
        Self {
            bonus_add: round_amount(self.bonus_add),
            bonus_write_off: round_amount(self.bonus_write_off),
            deposit_add: round_amount(self.deposit_add),
            deposit_write_off: round_amount(self.deposit_write_off),
        }
    }
}

/// A transaction snapshot built from a basket.
///
/// Totals and line items are copied at construction; changing the basket afterwards does not
/// affect the order.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    transaction_id: String,
    transaction_number: String,
    transaction_date: DateTime,
    total: Decimal,
    total_discounted: Decimal,
    adjustments: OrderAdjustments,
    line_items: Vec<LineItem>,
}

impl Order {
    /// Create an order with no bonus or deposit movements.
    pub fn new(
        transaction_id: impl Into<String>,
        transaction_number: impl Into<String>,
        transaction_date: DateTime,
        basket: &Basket,
    ) -> Self {
        Self::with_adjustments(
            transaction_id,
            transaction_number,
            transaction_date,
            basket,
            OrderAdjustments::default(),
        )
    }

    /// Create an order carrying bonus and deposit movements, each rounded to two places.
    pub fn with_adjustments(
        transaction_id: impl Into<String>,
        transaction_number: impl Into<String>,
        transaction_date: DateTime,
        basket: &Basket,
        adjustments: OrderAdjustments,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            transaction_number: transaction_number.into(),
            transaction_date,
            total: basket.total(),
            total_discounted: basket.total_discounted(),
            adjustments: adjustments.rounded(),
            line_items: basket.list_items().cloned().collect(),
        }
    }

    /// Caller-supplied transaction id.
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// Transaction number, e.g. a receipt number.
    pub fn transaction_number(&self) -> &str {
        &self.transaction_number
    }

    /// When the transaction happened.
    pub fn transaction_date(&self) -> DateTime {
        self.transaction_date
    }

    /// Basket total at construction time.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Discounted basket total at construction time.
    pub fn total_discounted(&self) -> Decimal {
        self.total_discounted
    }

    /// Bonus and deposit movements.
    pub fn adjustments(&self) -> &OrderAdjustments {
        &self.adjustments
    }

    /// Line items copied from the basket.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Export the order in the shape used to create or update a transaction.
    pub fn export(&self) -> OrderPayload {
        OrderPayload {
            guid: self.transaction_id.clone(),
            number: self.transaction_number.clone(),
            date: self.formatted_date(),
            sum: self.total,
            sum_discount: self.total_discounted,
            bonus_add: self.adjustments.bonus_add,
            bonus_write_off: self.adjustments.bonus_write_off,
            deposit_add: self.adjustments.deposit_add,
            deposit_write_off: self.adjustments.deposit_write_off,
            cart: self.line_items.clone(),
        }
    }

    /// Export the payload that cancels this transaction.
    pub fn cancellation(&self) -> OrderCancellation {
        OrderCancellation {
            guid: self.transaction_id.clone(),
            date: self.formatted_date(),
            sum: self.total,
        }
    }

    fn formatted_date(&self) -> String {
        self.transaction_date
            .strftime(TRANSACTION_DATE_FORMAT)
            .to_string()
    }
}

/// Wire shape of an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// Transaction id.
    pub guid: String,

    /// Transaction number.
    pub number: String,

    /// Transaction date, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,

    /// Total before discounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub sum: Decimal,

    /// Total after discounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub sum_discount: Decimal,

    /// Bonuses credited.
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus_add: Decimal,

    /// Bonuses spent.
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus_write_off: Decimal,

    /// Deposit top-up.
    #[serde(with = "rust_decimal::serde::float")]
    pub deposit_add: Decimal,

    /// Deposit spent.
    #[serde(with = "rust_decimal::serde::float")]
    pub deposit_write_off: Decimal,

    /// Line items.
    pub cart: Vec<LineItem>,
}

/// Wire shape of a transaction cancellation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderCancellation {
    /// Transaction id.
    pub guid: String,

    /// Transaction date, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,

    /// Total before discounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub sum: Decimal,
}
