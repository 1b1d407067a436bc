use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_info, engine_warn};
use tokio_util::sync::CancellationToken;

use crate::fetch::{CatalogFetcher, ChannelProgressSink, FetchSettings, ReqwestFetcher};
use crate::EngineEvent;

enum EngineCommand {
    FetchCatalog,
}

/// Handle to the engine thread. Commands go in over a channel; events come
/// back over the receiver returned by [`EngineHandle::new`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));
        let token = cancel.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let token = token.clone();
                runtime.block_on(async move {
                    handle_command(fetcher.as_ref(), command, event_tx, token).await;
                });
            }
        });

        (Self { cmd_tx, cancel }, event_rx)
    }

    /// Requests the one-time catalog download.
    pub fn fetch_catalog(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchCatalog);
    }

    /// Aborts any in-flight fetch, so a late completion never races the
    /// shell's exit path.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

async fn handle_command(
    fetcher: &dyn CatalogFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    cancel: CancellationToken,
) {
    match command {
        EngineCommand::FetchCatalog => {
            engine_info!("fetching catalog");
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = fetcher.fetch(&sink, &cancel).await;
            match &result {
                Ok(products) => engine_info!("catalog fetched: {} products", products.len()),
                Err(err) => engine_warn!("catalog fetch failed: {} ({})", err, err.kind),
            }
            let _ = event_tx.send(EngineEvent::CatalogCompleted { result });
        }
    }
}
