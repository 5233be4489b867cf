//! Card messages and template variables

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of template variable slots, `var1` to `var15`.
pub const VARIABLE_SLOTS: u8 = 15;

/// Send a client their card link by SMS.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSms {
    /// Client whose card is sent.
    pub client_id: i64,

    /// Message text; `%LINK%` is replaced with the card link.
    pub message: String,

    /// When to send, in unix seconds.
    pub time: String,
}

/// Values for the card template variables `var1` to `var15`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientVariables(BTreeMap<String, String>);

impl ClientVariables {
    /// Create an empty set of variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set variable `index`. Returns `false` and leaves the set untouched when `index` is not
    /// between 1 and 15.
    pub fn set(&mut self, index: u8, value: impl Into<String>) -> bool {
        if !(1..=VARIABLE_SLOTS).contains(&index) {
            return false;
        }

        self.0.insert(format!("var{index}"), value.into());

        true
    }

    /// Value of variable `index`, if set.
    pub fn get(&self, index: u8) -> Option<&str> {
        self.0.get(&format!("var{index}")).map(String::as_str)
    }

    /// Number of variables set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no variable is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One `updateVars` entry: a client id followed by its variables.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientVariablesEntry {
    pub(crate) client_id: i64,

    #[serde(flatten)]
    pub(crate) variables: ClientVariables,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn set_rejects_out_of_range_slots() {
        let mut variables = ClientVariables::new();

        assert!(variables.set(1, "100 rub"));
        assert!(variables.set(15, "last"));
        assert!(!variables.set(0, "zero"));
        assert!(!variables.set(16, "sixteen"));

        assert_eq!(variables.len(), 2);
        assert_eq!(variables.get(1), Some("100 rub"));
        assert_eq!(variables.get(16), None);
    }

    #[test]
    fn entry_flattens_variables() -> TestResult {
        let mut variables = ClientVariables::new();
        variables.set(1, "100 rub");
        variables.set(2, "10%");

        let entry = ClientVariablesEntry {
            client_id: 1234,
            variables,
        };

        assert_eq!(
            serde_json::to_value(&entry)?,
            json!({ "clientId": 1234, "var1": "100 rub", "var2": "10%" })
        );

        Ok(())
    }

    #[test]
    fn card_sms_wire_shape() -> TestResult {
        let sms = CardSms {
            client_id: 1234,
            message: "Your card: %LINK%".to_string(),
            time: "1543415640".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&sms)?,
            json!({ "clientId": 1234, "message": "Your card: %LINK%", "time": "1543415640" })
        );

        Ok(())
    }
}
