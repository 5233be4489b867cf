//! Client configuration

use std::fmt;

/// Production endpoint of the loyalty service API.
pub const DEFAULT_BASE_URL: &str = "https://app.cardloyalty.ru/api/v2";

/// Configuration for connecting to the loyalty service.
#[derive(Clone)]
pub struct ClientConfig {
    /// API root, e.g. `"https://app.cardloyalty.ru/api/v2"`.
    pub base_url: String,

    /// Access token appended to every request.
    pub token: String,
}

impl ClientConfig {
    /// Configuration for the production endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    /// Point the client at a different API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
