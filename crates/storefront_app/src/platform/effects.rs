use std::sync::mpsc;
use std::thread;

use engine_logging::{engine_info, engine_warn};
use storefront_core::{Effect, Msg};
use storefront_engine::{EngineEvent, EngineHandle, FetchSettings};

/// Executes core effects against the engine and pumps engine events back
/// into the shell's message channel.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let (engine, event_rx) = EngineHandle::new(FetchSettings::default());
        spawn_event_pump(event_rx, msg_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCatalog => {
                    engine_info!("FetchCatalog effect handed to engine");
                    self.engine.fetch_catalog();
                }
            }
        }
    }

    /// Cancels any in-flight download before the shell tears the UI down.
    pub fn shutdown(&self) {
        self.engine.shutdown();
    }
}

fn spawn_event_pump(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                EngineEvent::Progress(progress) => Msg::FetchProgress {
                    bytes: progress.bytes,
                },
                EngineEvent::CatalogCompleted { result } => match result {
                    Ok(products) => {
                        engine_info!("catalog loaded: {} products", products.len());
                        Msg::CatalogLoaded(products)
                    }
                    Err(err) => {
                        engine_warn!("catalog fetch failed: {} ({})", err, err.kind);
                        Msg::CatalogFailed(err.to_string())
                    }
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
