use std::time::Duration;

use crate::Transformer;

pub const DEFAULT_DEBOUNCE_INTERVAL: Duration = Duration::from_millis(300);
pub const DEFAULT_PLACEHOLDER: &str = "search…";
pub const DEFAULT_SEARCH_KEY: &str = "name";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("api endpoint is required")]
    MissingEndpoint,
    #[error("search key must not be empty")]
    EmptySearchKey,
}

/// Options the host supplies when mounting a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Base URL that already carries its own query parameters; `&q=<text>` is appended.
    pub api_endpoint: String,
    pub debounce_interval: Duration,
    pub placeholder: String,
    /// Record field shown in each row and used as its key.
    pub search_key: String,
    /// Cancel the in-flight request whenever a newer query starts.
    pub abort_pending_requests: bool,
    /// Without a transformer every successful response yields no rows.
    pub transformer: Option<Transformer>,
}

impl WidgetConfig {
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
            debounce_interval: DEFAULT_DEBOUNCE_INTERVAL,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            search_key: DEFAULT_SEARCH_KEY.to_string(),
            abort_pending_requests: false,
            transformer: None,
        }
    }

    pub fn with_debounce_interval(mut self, interval: Duration) -> Self {
        self.debounce_interval = interval;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_search_key(mut self, search_key: impl Into<String>) -> Self {
        self.search_key = search_key.into();
        self
    }

    pub fn with_abort_pending_requests(mut self, enabled: bool) -> Self {
        self.abort_pending_requests = enabled;
        self
    }

    pub fn with_transformer(mut self, transformer: Transformer) -> Self {
        self.transformer = Some(transformer);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        if self.search_key.is_empty() {
            return Err(ConfigError::EmptySearchKey);
        }
        Ok(())
    }
}
