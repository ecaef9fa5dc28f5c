use std::collections::HashMap;
use std::sync::Arc;

use autocomplete_core::{
    update, AppState, AutoCompleteView, ConfigError, Effect, Msg, ResultEnvelope, WidgetConfig,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use widget_logging::{widget_debug, widget_info};

use crate::{Debouncer, FetchGateway, Transport};

enum ShellEvent {
    Input(String),
    Settled {
        call: u64,
        query: String,
        envelope: ResultEnvelope,
    },
}

/// Widget shell: owns the state, the debouncer and the one gateway of a widget.
///
/// Raw input goes in through [`handle_input`](Self::handle_input); the host
/// drives the event loop with [`next_update`](Self::next_update) or
/// [`process_pending`](Self::process_pending) and paints [`view`](Self::view).
/// All work happens on the caller's tokio runtime.
pub struct AutoComplete {
    state: AppState,
    gateway: FetchGateway,
    debouncer: Debouncer<String>,
    event_tx: mpsc::UnboundedSender<ShellEvent>,
    event_rx: mpsc::UnboundedReceiver<ShellEvent>,
    /// Calls whose result has not been dispatched yet, keyed by call id.
    /// `None` marks a call that cannot be cancelled (abort disabled).
    outstanding: HashMap<u64, Option<CancellationToken>>,
    next_call: u64,
}

impl AutoComplete {
    pub fn new(config: WidgetConfig, transport: Arc<dyn Transport>) -> Result<Self, ConfigError> {
        config.validate()?;

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let input_tx = event_tx.clone();
        let debouncer = Debouncer::new(config.debounce_interval, move |text: String| {
            let _ = input_tx.send(ShellEvent::Input(text));
        });

        Ok(Self {
            state: AppState::new(&config),
            gateway: FetchGateway::new(transport, config.abort_pending_requests),
            debouncer,
            event_tx,
            event_rx,
            outstanding: HashMap::new(),
            next_call: 0,
        })
    }

    /// Records a raw change of the input box. `text` is its full current value.
    pub fn handle_input(&mut self, text: impl Into<String>) {
        self.debouncer.schedule(text.into());
    }

    /// Waits for the next debounced input or settled call and applies it.
    pub async fn next_update(&mut self) {
        // The shell keeps a sender alive, so the channel never closes.
        if let Some(event) = self.event_rx.recv().await {
            self.dispatch_event(event);
        }
    }

    /// Applies every event that is already queued. Returns how many were handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.dispatch_event(event);
            handled += 1;
        }
        handled
    }

    pub fn view(&self) -> AutoCompleteView {
        self.state.view()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    /// No debounced input is waiting and every call that can still deliver a
    /// result has been dispatched. Queued events are not considered; drain
    /// them with `process_pending` first.
    pub fn is_idle(&self) -> bool {
        !self.debouncer.is_pending() && !self.outstanding.values().any(is_live)
    }

    fn dispatch_event(&mut self, event: ShellEvent) {
        let msg = match event {
            ShellEvent::Input(text) => Msg::InputChanged(text),
            ShellEvent::Settled {
                call,
                query,
                envelope,
            } => {
                if !self.outstanding.remove(&call).is_some_and(|token| is_live(&token)) {
                    widget_debug!("Dropping superseded result query={:?}", query);
                    return;
                }
                widget_info!(
                    "Query settled query={:?} status={:?} message={}",
                    query,
                    envelope.status,
                    envelope.message
                );
                Msg::FetchSettled { query, envelope }
            }
        };
        self.dispatch_msg(msg);
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { request, query } => {
                    widget_debug!("Fetch query={:?} url={}", query, request.url());
                    let pending = self.gateway.begin(request);
                    // Cancelled calls never report back; forget them here.
                    self.outstanding.retain(|_, token| is_live(token));
                    let call = self.next_call;
                    self.next_call += 1;
                    self.outstanding.insert(call, pending.token());
                    let event_tx = self.event_tx.clone();
                    tokio::spawn(async move {
                        if let Some(envelope) = pending.await {
                            let _ = event_tx.send(ShellEvent::Settled {
                                call,
                                query,
                                envelope,
                            });
                        }
                    });
                }
            }
        }
    }
}

fn is_live(token: &Option<CancellationToken>) -> bool {
    !token.as_ref().is_some_and(CancellationToken::is_cancelled)
}
