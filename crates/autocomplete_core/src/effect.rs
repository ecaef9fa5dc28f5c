use crate::QueryRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET through the widget's gateway, superseding any call still in flight.
    Fetch { request: QueryRequest, query: String },
}
