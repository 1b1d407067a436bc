use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront_engine::{
    CatalogFetcher, EngineEvent, FailureKind, FetchSettings, ProgressSink, ReqwestFetcher,
};

const CATALOG_BODY: &str = r#"[
    {"id": 1, "title": "Backpack", "price": 109.95, "category": "bags",
     "description": "Fits 15in laptops", "image": "https://img.example.com/1.png",
     "rating": {"rate": 3.9, "count": 120}},
    {"id": 2, "title": "T-Shirt", "price": 22.3, "category": "clothing",
     "description": "Slim fit", "image": "https://img.example.com/2.png"}
]"#;

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn new() -> Self {
        Self::default()
    }

    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn settings_for(server: &MockServer) -> FetchSettings {
    FetchSettings {
        endpoint: format!("{}/products", server.uri()),
        ..FetchSettings::default()
    }
}

#[tokio::test]
async fn fetcher_decodes_catalog_and_emits_progress() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CATALOG_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server));
    let sink = TestSink::new();
    let cancel = CancellationToken::new();

    let products = fetcher.fetch(&sink, &cancel).await.expect("fetch ok");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Backpack");
    assert_eq!(products[0].price, 109.95);
    assert_eq!(products[0].rating.count, 120);
    // The second record carries no rating object; it defaults to zero.
    assert_eq!(products[1].rating.count, 0);

    let bytes_seen = sink
        .take()
        .into_iter()
        .filter_map(|event| match event {
            EngineEvent::Progress(progress) => Some(progress.bytes),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert!(bytes_seen.last().is_some_and(|&bytes| bytes > 0));
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server));
    let sink = TestSink::new();
    let cancel = CancellationToken::new();

    let err = fetcher.fetch(&sink, &cancel).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("[]"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let fetcher = ReqwestFetcher::new(settings);
    let sink = TestSink::new();
    let cancel = CancellationToken::new();

    let err = fetcher.fetch(&sink, &cancel).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .insert_header("Content-Length", "11")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..settings_for(&server)
    };
    let fetcher = ReqwestFetcher::new(settings);
    let sink = TestSink::new();
    let cancel = CancellationToken::new();

    let err = fetcher.fetch(&sink, &cancel).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server));
    let sink = TestSink::new();
    let cancel = CancellationToken::new();

    let err = fetcher.fetch(&sink, &cancel).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidBody);
}

#[tokio::test]
async fn fetcher_rejects_invalid_endpoint() {
    let settings = FetchSettings {
        endpoint: "not a url".to_string(),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let sink = TestSink::new();
    let cancel = CancellationToken::new();

    let err = fetcher.fetch(&sink, &cancel).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn cancelled_token_aborts_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_string("[]"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server));
    let sink = TestSink::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = fetcher.fetch(&sink, &cancel).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Cancelled);
}
