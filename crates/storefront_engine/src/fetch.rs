use std::sync::mpsc;
use std::time::Duration;

use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;

use storefront_core::Product;

use crate::decode::decode_catalog;
use crate::{EngineEvent, FailureKind, FetchError, FetchProgress};

/// Catalog endpoint queried once at startup.
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch(
        &self,
        sink: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<Vec<Product>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, format!("network error: {err}")))
    }

    async fn fetch_inner(&self, sink: &dyn ProgressSink) -> Result<Vec<Product>, FetchError> {
        let url = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, format!("invalid url: {err}")))?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("http status {status}"),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, Some(content_len)));
            }
        }

        sink.emit(EngineEvent::Progress(FetchProgress { bytes: 0 }));

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, Some(next_len)));
            }
            body.extend_from_slice(&chunk);
            sink.emit(EngineEvent::Progress(FetchProgress {
                bytes: body.len() as u64,
            }));
        }

        decode_catalog(&body)
    }
}

#[async_trait::async_trait]
impl CatalogFetcher for ReqwestFetcher {
    async fn fetch(
        &self,
        sink: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<Vec<Product>, FetchError> {
        tokio::select! {
            _ = cancel.cancelled() => {
                Err(FetchError::new(FailureKind::Cancelled, "fetch cancelled"))
            }
            result = self.fetch_inner(sink) => result,
        }
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, "request timed out");
    }
    FetchError::new(FailureKind::Network, format!("network error: {err}"))
}
