//! Autocomplete core: pure state machine, highlighting and view-model helpers.
mod config;
mod effect;
mod envelope;
mod highlight;
mod msg;
mod query;
mod record;
mod state;
mod update;
mod view_model;

pub use config::{
    ConfigError, WidgetConfig, DEFAULT_DEBOUNCE_INTERVAL, DEFAULT_PLACEHOLDER, DEFAULT_SEARCH_KEY,
};
pub use effect::Effect;
pub use envelope::{EnvelopeStatus, ResultEnvelope, MISSING_URL_MESSAGE, SUCCESS_MESSAGE};
pub use highlight::{highlight, Segment};
pub use msg::Msg;
pub use query::{build_query_url, QueryRequest};
pub use record::{record_key, Record, Transformer};
pub use state::AppState;
pub use update::update;
pub use view_model::{AutoCompleteView, ResultRow, LOADING_TEXT};
