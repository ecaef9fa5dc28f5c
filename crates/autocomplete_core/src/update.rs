use crate::{build_query_url, AppState, Effect, Msg, QueryRequest};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            if text.is_empty() {
                state.reset_query();
                return (state, Vec::new());
            }

            state.begin_query();
            let request = QueryRequest::new(build_query_url(state.endpoint(), &text));
            vec![Effect::Fetch {
                request,
                query: text,
            }]
        }
        Msg::FetchSettled { query, envelope } => {
            state.apply_envelope(query, envelope);
            Vec::new()
        }
    };

    (state, effects)
}
