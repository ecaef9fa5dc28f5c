use url::form_urlencoded;

/// One GET to issue. Built once per debounced input and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    url: String,
}

impl QueryRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Appends the encoded query text to an endpoint that already carries its own
/// query string, e.g. `https://host/search?rows=10` becomes
/// `https://host/search?rows=10&q=ann`.
pub fn build_query_url(endpoint: &str, text: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("{endpoint}&q={encoded}")
}
