//! Client lookup keys

use std::fmt;

/// How a client is identified in lookups and transactions.
///
/// The service accepts the same four identifiers on every client-scoped endpoint as a
/// `type`/`id` query pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientLookup {
    /// Internal client id.
    ClientId(i64),

    /// Card token or barcode (latin letters and digits only).
    CardBarcode(String),

    /// Printed card number.
    CardNumber(String),

    /// Phone number, e.g. `"79777121350"`.
    Phone(String),
}

impl ClientLookup {
    /// Value of the `type` query parameter.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ClientId(_) => "clientId",
            Self::CardBarcode(_) => "cardBarcode",
            Self::CardNumber(_) => "cardNumber",
            Self::Phone(_) => "phone",
        }
    }

    /// Value of the `id` query parameter.
    pub fn value(&self) -> String {
        match self {
            Self::ClientId(id) => id.to_string(),
            Self::CardBarcode(value) | Self::CardNumber(value) | Self::Phone(value) => {
                value.clone()
            }
        }
    }

    pub(crate) fn query(&self) -> [(&'static str, String); 2] {
        [("type", self.kind().to_string()), ("id", self.value())]
    }
}

impl fmt::Display for ClientLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind(), self.value())
    }
}
