//! Host configuration loaded from a RON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use autocomplete_core::{
    Transformer, WidgetConfig, DEFAULT_DEBOUNCE_INTERVAL, DEFAULT_PLACEHOLDER, DEFAULT_SEARCH_KEY,
};
use serde::Deserialize;
use widget_logging::{widget_info, LogDestination, DEFAULT_LOG_FILE};

pub const DEFAULT_CONFIG_FILENAME: &str = "autocomplete.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub api_endpoint: String,
    pub debounce_ms: u64,
    pub placeholder: String,
    pub search_key: String,
    pub abort_pending_requests: bool,
    /// JSON pointer to the array of records inside the response body.
    pub results_pointer: Option<String>,
    pub log_destination: LogTarget,
    pub log_file: PathBuf,
    pub ansi: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            api_endpoint: String::new(),
            debounce_ms: DEFAULT_DEBOUNCE_INTERVAL.as_millis() as u64,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            search_key: DEFAULT_SEARCH_KEY.to_string(),
            abort_pending_requests: false,
            results_pointer: None,
            log_destination: LogTarget::File,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            ansi: true,
        }
    }
}

impl HostConfig {
    pub fn widget_config(&self) -> anyhow::Result<WidgetConfig> {
        let mut config = WidgetConfig::new(self.api_endpoint.clone())
            .with_debounce_interval(Duration::from_millis(self.debounce_ms))
            .with_placeholder(self.placeholder.clone())
            .with_search_key(self.search_key.clone())
            .with_abort_pending_requests(self.abort_pending_requests);
        if let Some(pointer) = &self.results_pointer {
            config = config.with_transformer(Transformer::from_pointer(pointer.clone()));
        }
        config.validate().context("invalid widget configuration")?;
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> anyhow::Result<HostConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: HostConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    widget_info!("Loaded host configuration from {:?}", path);
    Ok(config)
}
