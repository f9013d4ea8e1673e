//! Client configuration shared by both front ends.

use std::time::Duration;

/// How long a notice stays visible.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

/// Base URL used by the terminal front end when none is given.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server root. Empty means same origin (browser).
    pub base_url: String,
    pub notice_timeout: Duration,
    /// Also send the signup email as an `?email=` query parameter, for
    /// backends that bind it from the query string.
    pub email_in_query: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            notice_timeout: NOTICE_TIMEOUT,
            email_in_query: false,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn email_in_query(mut self, enabled: bool) -> Self {
        self.email_in_query = enabled;
        self
    }

    /// Joins `path` (which starts with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
