mod common;

use std::sync::Arc;

use autocomplete_core::{EnvelopeStatus, QueryRequest, ResultEnvelope};
use autocomplete_engine::{FailureKind, FetchError, FetchGateway};
use common::{init_logging, wait_for_calls, ImmediateTransport, ScriptedTransport};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn empty_url_reports_missing_parameter_without_io() {
    init_logging();
    let transport = Arc::new(ImmediateTransport::new(json!({})));
    let mut gateway = FetchGateway::new(transport.clone(), true);

    let envelope = gateway.fetch(QueryRequest::new("")).await;

    assert_eq!(
        envelope,
        Some(ResultEnvelope {
            status: EnvelopeStatus::Empty,
            message: "URL is a required parameter".to_string(),
            data: None,
        })
    );
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn superseded_empty_url_call_yields_nothing() {
    init_logging();
    let transport = Arc::new(ImmediateTransport::new(json!({})));
    let mut gateway = FetchGateway::new(transport.clone(), true);

    let first = gateway.begin(QueryRequest::new(""));
    let second = gateway.begin(QueryRequest::new("http://h/s?x=1&q=ab"));

    assert_eq!(first.await, None);
    assert!(second.await.is_some());
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn success_wraps_parsed_body() {
    init_logging();
    let body = json!({ "data": { "docs": [] } });
    let transport = Arc::new(ImmediateTransport::new(body.clone()));
    let mut gateway = FetchGateway::new(transport.clone(), false);

    let envelope = gateway
        .fetch(QueryRequest::new("http://h/s?x=1&q=a"))
        .await
        .expect("envelope");

    assert_eq!(envelope.status, EnvelopeStatus::Success);
    assert_eq!(envelope.message, "Data Fetched successfully");
    assert_eq!(envelope.data, Some(body));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn transport_error_becomes_failure_envelope() {
    init_logging();
    let transport = Arc::new(ScriptedTransport::default());
    let mut gateway = FetchGateway::new(transport.clone(), true);

    let call = tokio::spawn(gateway.begin(QueryRequest::new("http://h/s?x=1&q=a")));
    wait_for_calls(&transport, 1).await;
    transport.resolve(
        0,
        Err(FetchError::new(FailureKind::Network, "connection refused")),
    );

    let envelope = call.await.unwrap().expect("envelope");
    assert_eq!(envelope.status, EnvelopeStatus::Failure);
    assert_eq!(
        envelope.message,
        "API call failed with error: connection refused"
    );
}

#[tokio::test]
async fn newer_call_cancels_in_flight_call() {
    init_logging();
    let transport = Arc::new(ScriptedTransport::default());
    let mut gateway = FetchGateway::new(transport.clone(), true);

    let first = tokio::spawn(gateway.begin(QueryRequest::new("http://h/s?x=1&q=a")));
    wait_for_calls(&transport, 1).await;
    let second = tokio::spawn(gateway.begin(QueryRequest::new("http://h/s?x=1&q=ab")));
    wait_for_calls(&transport, 2).await;

    transport.resolve(1, Ok(json!({ "query": "ab" })));
    let _ = transport.resolve(0, Ok(json!({ "query": "a" })));

    assert_eq!(first.await.unwrap(), None);
    assert_eq!(
        second.await.unwrap(),
        Some(ResultEnvelope::success(json!({ "query": "ab" })))
    );
    assert!(gateway.has_live_token());
}

#[tokio::test]
async fn call_superseded_before_it_runs_never_reaches_transport() {
    init_logging();
    let transport = Arc::new(ImmediateTransport::new(json!({ "ok": true })));
    let mut gateway = FetchGateway::new(transport.clone(), true);

    let first = gateway.begin(QueryRequest::new("http://h/s?x=1&q=a"));
    let second = gateway.begin(QueryRequest::new("http://h/s?x=1&q=ab"));

    assert!(first.token().is_some_and(|token| token.is_cancelled()));
    assert_eq!(first.await, None);
    assert!(second.await.is_some());
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn without_abort_every_call_settles() {
    init_logging();
    let transport = Arc::new(ScriptedTransport::default());
    let mut gateway = FetchGateway::new(transport.clone(), false);

    let first = tokio::spawn(gateway.begin(QueryRequest::new("http://h/s?x=1&q=a")));
    let second = tokio::spawn(gateway.begin(QueryRequest::new("http://h/s?x=1&q=ab")));
    wait_for_calls(&transport, 2).await;
    assert!(!gateway.has_live_token());

    transport.resolve(1, Ok(json!(2)));
    transport.resolve(0, Ok(json!(1)));

    assert_eq!(first.await.unwrap(), Some(ResultEnvelope::success(json!(1))));
    assert_eq!(second.await.unwrap(), Some(ResultEnvelope::success(json!(2))));
}

#[tokio::test]
async fn dropping_gateway_cancels_live_call() {
    init_logging();
    let transport = Arc::new(ScriptedTransport::default());
    let mut gateway = FetchGateway::new(transport.clone(), true);

    let call = tokio::spawn(gateway.begin(QueryRequest::new("http://h/s?x=1&q=a")));
    wait_for_calls(&transport, 1).await;
    drop(gateway);

    assert_eq!(call.await.unwrap(), None);
}
