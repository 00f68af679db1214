//! Integration tests against a running zone-analysis backend.
//!
//! All tests are `#[ignore]` because they require a live server. The base URL
//! comes from `ZONECHART_API_URL` (a `.env` file is honored), falling back to
//! the local default.
//!
//! Run with:
//! ```bash
//! ZONECHART_API_URL=http://127.0.0.1:5000 cargo test --features native --test api_integration -- --ignored
//! ```

#![cfg(feature = "http")]

use std::time::Duration;

use zonechart::prelude::*;

fn client() -> ZoneClient {
    dotenvy::dotenv().ok();
    let url = std::env::var("ZONECHART_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    ZoneClient::builder()
        .base_url(&url)
        .timeout(Duration::from_secs(180))
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn catalog_lists_known_choices() {
    let catalog = client().catalog().get().await.expect("catalog fetch");
    assert!(catalog
        .intervals
        .iter()
        .any(|c| c.value == Interval::Day1));
    assert!(catalog.periods.iter().any(|c| c.value == Period::Year1));
}

#[tokio::test]
#[ignore]
async fn analyze_ticker_returns_chart() {
    let request = AnalysisRequest::for_ticker(
        TickerQuery::new("aapl", Interval::Day1, Period::Year1),
        Settings::default(),
    );
    let result = client().analysis().run(&request).await.expect("analysis");

    assert_eq!(result.label, "AAPL");
    assert_eq!(result.interval, "1d");
    assert!(result.chart.last_close().is_some());
    println!("{} zones for {}", result.zones.len(), result.title());
}

#[tokio::test]
#[ignore]
async fn unknown_ticker_is_server_error() {
    let request = AnalysisRequest::for_ticker(
        TickerQuery::new("ZZZZZZZZ", Interval::Day1, Period::Days60),
        Settings::default(),
    );
    let err = client().analysis().run(&request).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server, "got: {err:?}");
}

#[tokio::test]
#[ignore]
async fn upload_analyze_clear_lifecycle() {
    let client = client();
    let csv = "Date,Open,High,Low,Close,Volume\n\
               2024-01-02,10,11,9,10.5,1000\n\
               2024-01-03,10.5,12,10,11.5,1200\n\
               2024-01-04,11.5,12.5,11,12,900\n";
    let file = SelectedFile::new("sample.csv", csv.as_bytes().to_vec());

    let uploaded = client.uploads().upload(Some(&file)).await.expect("upload");
    assert_eq!(uploaded.filename, "sample.csv");

    // The upload slot follows the session cookie; the default native build
    // must carry it into the next request.
    let result = client
        .analysis()
        .run(&AnalysisRequest::for_upload(Settings::default()))
        .await
        .expect("analysis over the uploaded file");
    assert_eq!(result.interval, "Custom");

    client.uploads().clear().await.expect("clear");
}
