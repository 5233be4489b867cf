//! Transactions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de::{lenient_id, lenient_string, null_as_default};

/// Acknowledgement of a recorded, updated or returned transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// Transaction id echoed back by the service.
    #[serde(default, deserialize_with = "lenient_string")]
    pub guid: String,
}

/// A transaction recorded on the service side since the last poll.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Client the transaction belongs to.
    #[serde(default, deserialize_with = "lenient_id")]
    pub client_id: Option<i64>,

    /// Transaction id.
    #[serde(default, deserialize_with = "lenient_string")]
    pub guid: String,

    /// Transaction number.
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: String,

    /// Transaction date, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,

    /// Total before discounts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sum: Decimal,

    /// Total after discounts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sum_discount: Decimal,

    /// Bonuses credited.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bonus_add: Decimal,

    /// Bonuses spent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bonus_write_off: Decimal,

    /// Bonus balance after the visit.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bonus_after: Decimal,

    /// Deposit top-up.
    #[serde(default, deserialize_with = "null_as_default")]
    pub deposit_add: Decimal,

    /// Deposit spent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub deposit_write_off: Decimal,

    /// Deposit balance after the visit.
    #[serde(default, deserialize_with = "null_as_default")]
    pub deposit_after: Decimal,
}

/// A batch of new transactions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewOrderList {
    /// Transactions, empty when there are none.
    #[serde(rename = "newOrder", default, deserialize_with = "null_as_default")]
    pub orders: Vec<NewOrder>,
}
