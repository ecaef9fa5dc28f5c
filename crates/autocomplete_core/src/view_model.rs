use crate::{highlight, record_key, Record, Segment};

pub const LOADING_TEXT: &str = "Loading ......";

/// Everything the host paints for one widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutoCompleteView {
    pub placeholder: String,
    pub is_loading: bool,
    pub rows: Vec<ResultRow>,
    /// True only when there is an error and no rows to show, even stale ones.
    pub error_visible: bool,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// Search-key field value of the record.
    pub key: String,
    pub segments: Vec<Segment>,
}

pub(crate) fn build_rows(results: &[Record], search_key: &str, query: &str) -> Vec<ResultRow> {
    results
        .iter()
        .map(|record| {
            let key = record_key(record, search_key);
            let segments = highlight(&key, query);
            ResultRow { key, segments }
        })
        .collect()
}
