//! Response envelopes

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de::lenient_string;

/// The `{"response": ...}` wrapper most write endpoints answer with.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// Wrapped payload.
    pub response: T,
}

impl<T> Envelope<T> {
    /// Unwrap the payload.
    pub fn into_inner(self) -> T {
        self.response
    }
}

/// Status answer of the token check and organisation registration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// `"1"` on success.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,

    /// Human readable message, e.g. `"Token ok"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

impl Status {
    /// Check if the service reported success.
    pub fn is_ok(&self) -> bool {
        self.status == "1"
    }
}

/// Plain `{"response": "ok"}` acknowledgement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Raw response value.
    #[serde(default)]
    pub response: Value,
}

impl Acknowledgement {
    /// Check if the service answered `"ok"`.
    pub fn is_ok(&self) -> bool {
        self.response
            .as_str()
            .is_some_and(|answer| answer.eq_ignore_ascii_case("ok"))
    }
}
