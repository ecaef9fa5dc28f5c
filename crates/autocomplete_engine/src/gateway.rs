use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use autocomplete_core::{QueryRequest, ResultEnvelope};
use futures_util::future::{BoxFuture, FutureExt};
use tokio_util::sync::CancellationToken;
use widget_logging::{widget_debug, widget_warn};

use crate::Transport;

/// Turns one GET into a [`ResultEnvelope`].
///
/// With abort enabled the gateway is single-flight with preemption: it holds at
/// most one live token, and starting a call cancels the token of the previous
/// call before the new one is minted. A cancelled call resolves to `None`, even
/// if the transport still delivers a response afterwards.
pub struct FetchGateway {
    transport: Arc<dyn Transport>,
    abort_pending: bool,
    live_token: Option<CancellationToken>,
}

impl FetchGateway {
    pub fn new(transport: Arc<dyn Transport>, abort_pending: bool) -> Self {
        Self {
            transport,
            abort_pending,
            live_token: None,
        }
    }

    /// Starts a call. Superseding the previous call happens here, synchronously,
    /// before the returned future is ever polled.
    pub fn begin(&mut self, request: QueryRequest) -> PendingCall {
        let token = self.rebind_token();
        let transport = Arc::clone(&self.transport);
        let call_token = token.clone();
        let call = async move { run_call(transport.as_ref(), request, call_token).await }.boxed();
        PendingCall { token, call }
    }

    pub async fn fetch(&mut self, request: QueryRequest) -> Option<ResultEnvelope> {
        self.begin(request).await
    }

    pub fn has_live_token(&self) -> bool {
        self.live_token
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    fn rebind_token(&mut self) -> Option<CancellationToken> {
        if !self.abort_pending {
            return None;
        }
        if let Some(previous) = self.live_token.take() {
            if !previous.is_cancelled() {
                widget_debug!("Cancelling superseded request");
            }
            previous.cancel();
        }
        let token = CancellationToken::new();
        self.live_token = Some(token.clone());
        Some(token)
    }
}

/// A started gateway call. Resolves to `None` when the call was cancelled.
pub struct PendingCall {
    token: Option<CancellationToken>,
    call: BoxFuture<'static, Option<ResultEnvelope>>,
}

impl PendingCall {
    /// Token bound to this call, if abort is enabled. It reports cancellation
    /// even after the call has resolved, so a result still queued somewhere
    /// can be recognised as superseded.
    pub fn token(&self) -> Option<CancellationToken> {
        self.token.clone()
    }
}

impl Future for PendingCall {
    type Output = Option<ResultEnvelope>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.call.poll_unpin(cx)
    }
}

impl Drop for FetchGateway {
    fn drop(&mut self) {
        if let Some(token) = self.live_token.take() {
            token.cancel();
        }
    }
}

async fn run_call(
    transport: &dyn Transport,
    request: QueryRequest,
    token: Option<CancellationToken>,
) -> Option<ResultEnvelope> {
    if token.as_ref().is_some_and(CancellationToken::is_cancelled) {
        widget_debug!("Request superseded before it started url={}", request.url());
        return None;
    }
    if request.url().is_empty() {
        return Some(ResultEnvelope::missing_url());
    }

    let outcome = match &token {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    widget_debug!("Request dropped after cancellation url={}", request.url());
                    return None;
                }
                outcome = transport.get_json(request.url()) => outcome,
            }
        }
        None => transport.get_json(request.url()).await,
    };

    if token.as_ref().is_some_and(CancellationToken::is_cancelled) {
        widget_debug!("Late response suppressed url={}", request.url());
        return None;
    }

    Some(match outcome {
        Ok(data) => ResultEnvelope::success(data),
        Err(err) => {
            widget_warn!("Request failed url={} kind={}: {}", request.url(), err.kind, err);
            ResultEnvelope::failure(&err)
        }
    })
}
