use std::fmt;

use serde_json::Value;

pub const MISSING_URL_MESSAGE: &str = "URL is a required parameter";
pub const SUCCESS_MESSAGE: &str = "Data Fetched successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStatus {
    Success,
    /// No URL was supplied; no network attempt was made.
    Empty,
    Failure,
}

/// Uniform outcome of one completed gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEnvelope {
    pub status: EnvelopeStatus,
    pub message: String,
    pub data: Option<Value>,
}

impl ResultEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    pub fn missing_url() -> Self {
        Self {
            status: EnvelopeStatus::Empty,
            message: MISSING_URL_MESSAGE.to_string(),
            data: None,
        }
    }

    pub fn failure(cause: impl fmt::Display) -> Self {
        Self {
            status: EnvelopeStatus::Failure,
            message: format!("API call failed with error: {cause}"),
            data: None,
        }
    }
}
