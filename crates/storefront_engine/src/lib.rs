//! Storefront engine: catalog download pipeline and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::decode_catalog;
pub use engine::EngineHandle;
pub use fetch::{
    CatalogFetcher, ChannelProgressSink, FetchSettings, ProgressSink, ReqwestFetcher,
    DEFAULT_ENDPOINT,
};
pub use types::{EngineEvent, FailureKind, FetchError, FetchProgress};
