use crate::view_model::{build_rows, AutoCompleteView};
use crate::{EnvelopeStatus, Record, ResultEnvelope, Transformer, WidgetConfig};

/// Per-widget state. Never shared between widget instances.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    endpoint: String,
    search_key: String,
    placeholder: String,
    transformer: Option<Transformer>,
    results: Vec<Record>,
    last_query_text: String,
    error_message: String,
    is_loading: bool,
    dirty: bool,
}

impl AppState {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            endpoint: config.api_endpoint.clone(),
            search_key: config.search_key.clone(),
            placeholder: config.placeholder.clone(),
            transformer: config.transformer.clone(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AutoCompleteView {
        let error_visible = !self.error_message.is_empty() && self.results.is_empty();
        AutoCompleteView {
            placeholder: self.placeholder.clone(),
            is_loading: self.is_loading,
            rows: build_rows(&self.results, &self.search_key, &self.last_query_text),
            error_visible,
            error_message: self.error_message.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn results(&self) -> &[Record] {
        &self.results
    }

    pub fn last_query_text(&self) -> &str {
        &self.last_query_text
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Input was cleared. The loading flag stays with whichever call is still outstanding.
    pub(crate) fn reset_query(&mut self) {
        self.results.clear();
        self.last_query_text.clear();
        self.error_message.clear();
        self.dirty = true;
    }

    pub(crate) fn begin_query(&mut self) {
        self.results.clear();
        self.error_message.clear();
        self.is_loading = true;
        self.dirty = true;
    }

    pub(crate) fn apply_envelope(&mut self, query: String, envelope: ResultEnvelope) {
        match envelope.status {
            EnvelopeStatus::Success => {
                self.results = match (&self.transformer, &envelope.data) {
                    (Some(transformer), Some(data)) => transformer.apply(data),
                    _ => Vec::new(),
                };
                self.last_query_text = query;
            }
            EnvelopeStatus::Empty | EnvelopeStatus::Failure => {
                self.results.clear();
                self.error_message = envelope.message;
            }
        }
        self.is_loading = false;
        self.dirty = true;
    }
}
