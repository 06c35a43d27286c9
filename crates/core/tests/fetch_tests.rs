use httpmock::prelude::*;
use unbundle_core::{FetchError, HttpFetcher, SourceFetcher};

#[tokio::test]
async fn fetches_body_on_success() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/app.js.map");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"version":3,"sources":[]}"#);
    });

    let fetcher = HttpFetcher::new().unwrap();
    let body = fetcher
        .fetch(&format!("{}/app.js.map", server.base_url()))
        .await
        .unwrap();

    mock.assert();
    assert!(body.contains("\"version\":3"));
}

#[tokio::test]
async fn non_success_status_is_distinguishable() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/gone.js");
        then.status(404);
    });

    let fetcher = HttpFetcher::with_attempts(1).unwrap();
    let err = fetcher
        .fetch(&format!("{}/gone.js", server.base_url()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::HttpStatus(404)));
}

#[tokio::test]
async fn rejects_non_http_schemes() {
    let fetcher = HttpFetcher::new().unwrap();
    let err = fetcher.fetch("ftp://example.com/map.json").await.unwrap_err();
    assert!(matches!(err, FetchError::UnsupportedScheme(_)));
}

#[tokio::test]
async fn invalid_url_is_not_a_network_error() {
    let fetcher = HttpFetcher::new().unwrap();
    let err = fetcher.fetch("not a url").await.unwrap_err();
    assert!(matches!(err, FetchError::UrlParse(_)));
}

#[tokio::test]
async fn retries_stop_after_configured_attempts() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/flaky.js");
        then.status(500);
    });

    let fetcher = HttpFetcher::with_attempts(3).unwrap();
    let err = fetcher
        .fetch(&format!("{}/flaky.js", server.base_url()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::HttpStatus(500)));
    mock.assert_hits(3);
}
