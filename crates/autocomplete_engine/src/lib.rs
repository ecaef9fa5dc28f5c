//! Autocomplete engine: HTTP transport, request gateway, debouncing and the widget shell.
mod debounce;
mod fetch;
mod gateway;
mod types;
mod widget;

pub use debounce::Debouncer;
pub use fetch::{FetchSettings, ReqwestTransport, Transport};
pub use gateway::{FetchGateway, PendingCall};
pub use types::{FailureKind, FetchError};
pub use widget::AutoComplete;
