//! Client errors

use std::fmt;

use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

/// Error code the service uses when an integration has no pending updates.
pub const NO_UPDATES_ERROR_ID: i64 = 715;

/// Errors that can occur when talking to the loyalty service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An HTTP transport or body error occurred.
    ///
    /// The request URL carries the token, so it is stripped from the wrapped error.
    #[error("http error: {0}")]
    Http(reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status returned.
        status: StatusCode,

        /// Raw response body.
        body: String,
    },

    /// The service answered 200 with an `error` section.
    #[error("loyalty service error: {0}")]
    Api(ApiErrors),

    /// The response did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A response list expected to carry a result was empty.
    #[error("empty response from {0}")]
    EmptyResponse(&'static str),
}

impl ClientError {
    /// Check if this is a service error carrying the given error id.
    pub fn is_api_error(&self, error_id: i64) -> bool {
        matches!(self, Self::Api(errors) if errors.contains(error_id))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.without_url())
    }
}

/// One entry of a service `error` section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiErrorDetail {
    /// Numeric error code, e.g. `702`.
    pub error_id: Option<i64>,

    /// Human readable message.
    pub message: Option<String>,

    /// Remaining fields, e.g. the phone or card number the error refers to.
    pub context: Map<String, Value>,
}

impl ApiErrorDetail {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(fields) => {
                let mut context = fields.clone();

                let error_id = context.remove("errorId").and_then(|id| match id {
                    Value::Number(number) => number.as_i64(),
                    Value::String(text) => text.trim().parse().ok(),
                    _ => None,
                });

                let message = context.remove("message").and_then(|message| match message {
                    Value::String(text) => Some(text),
                    Value::Null => None,
                    other => Some(other.to_string()),
                });

                Self {
                    error_id,
                    message,
                    context,
                }
            }
            Value::String(text) => Self {
                message: Some(text.clone()),
                ..Self::default()
            },
            other => Self {
                message: Some(other.to_string()),
                ..Self::default()
            },
        }
    }
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.error_id, self.message.as_deref()) {
            (Some(id), Some(message)) => write!(f, "[{id}] {message}"),
            (Some(id), None) => write!(f, "[{id}]"),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("unknown error"),
        }
    }
}

/// The `error` section of a service response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiErrors(pub Vec<ApiErrorDetail>);

impl ApiErrors {
    /// Extract the `error` section of a response, if it carries anything.
    ///
    /// Missing, `null`, `false`, `0` and empty values are treated as no error.
    pub fn from_response(response: &Value) -> Option<Self> {
        let section = response.get("error")?;

        if !is_present(section) {
            return None;
        }

        let details = match section {
            Value::Array(entries) => entries.iter().map(ApiErrorDetail::from_value).collect(),
            other => vec![ApiErrorDetail::from_value(other)],
        };

        Some(Self(details))
    }

    /// Check if any entry carries the given error id.
    pub fn contains(&self, error_id: i64) -> bool {
        self.0.iter().any(|detail| detail.error_id == Some(error_id))
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &ApiErrorDetail> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ApiErrors {
    type Item = &'a ApiErrorDetail;
    type IntoIter = std::slice::Iter<'a, ApiErrorDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, detail) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{detail}")?;
        }

        Ok(())
    }
}

fn is_present(section: &Value) -> bool {
    match section {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > f64::EPSILON),
        Value::String(text) => !text.is_empty(),
        Value::Array(entries) => !entries.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn no_error_section() {
        assert_eq!(ApiErrors::from_response(&json!({ "response": "ok" })), None);
        assert_eq!(ApiErrors::from_response(&json!([{ "id": "1" }])), None);
    }

    #[test]
    fn empty_error_sections_are_ignored() {
        for section in [json!(null), json!([]), json!({}), json!(""), json!(false), json!(0)] {
            assert_eq!(
                ApiErrors::from_response(&json!({ "error": section.clone() })),
                None,
                "section {section} should be ignored"
            );
        }
    }

    #[test]
    fn error_list_keeps_context() -> TestResult {
        let response = json!({
            "error": [{
                "phone": "79777121350",
                "cardNumber": "1234",
                "errorId": 702,
                "message": "invalid phone",
            }]
        });

        let errors = ApiErrors::from_response(&response).ok_or("Expected errors")?;
        let detail = errors.iter().next().ok_or("Expected one detail")?;

        assert_eq!(detail.error_id, Some(702));
        assert_eq!(detail.message.as_deref(), Some("invalid phone"));
        assert_eq!(detail.context.get("phone"), Some(&json!("79777121350")));
        assert!(!detail.context.contains_key("errorId"));

        Ok(())
    }

    #[test]
    fn error_object_with_string_id() -> TestResult {
        let response = json!({
            "update": null,
            "error": { "errorId": "715", "message": "No updates" }
        });

        let errors = ApiErrors::from_response(&response).ok_or("Expected errors")?;

        assert!(errors.contains(NO_UPDATES_ERROR_ID));
        assert_eq!(errors.to_string(), "[715] No updates");

        Ok(())
    }

    #[test]
    fn error_string_becomes_message() -> TestResult {
        let response = json!({ "error": "Invalid token" });

        let errors = ApiErrors::from_response(&response).ok_or("Expected errors")?;

        assert_eq!(errors.to_string(), "Invalid token");
        assert!(!errors.contains(NO_UPDATES_ERROR_ID));

        Ok(())
    }

    #[test]
    fn is_api_error_matches_id() {
        let error = ClientError::Api(ApiErrors(vec![ApiErrorDetail {
            error_id: Some(NO_UPDATES_ERROR_ID),
            ..ApiErrorDetail::default()
        }]));

        assert!(error.is_api_error(NO_UPDATES_ERROR_ID));
        assert!(!error.is_api_error(702));
        assert!(!ClientError::EmptyResponse("createClients").is_api_error(NO_UPDATES_ERROR_ID));
    }
}
