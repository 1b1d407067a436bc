use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            // The catalog is fetched once per process lifetime; a repeated
            // Started is a no-op.
            if state.fetch_started() {
                Vec::new()
            } else {
                state.begin_fetch();
                vec![Effect::FetchCatalog]
            }
        }
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::FetchProgress { bytes } => {
            state.apply_progress(bytes);
            Vec::new()
        }
        Msg::CatalogLoaded(products) => {
            state.apply_catalog(products);
            Vec::new()
        }
        Msg::CatalogFailed(message) => {
            state.apply_failure(message);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
