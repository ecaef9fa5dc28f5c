use crate::ResultEnvelope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Input box content after the debounce window closed.
    InputChanged(String),
    /// A gateway call completed with an envelope. Cancelled calls never post this.
    FetchSettled {
        query: String,
        envelope: ResultEnvelope,
    },
}
