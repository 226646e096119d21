//! REST API tests, driving the router directly without a socket.

#![cfg(feature = "server")]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use cc_numbers::api::{router, ErrorResponse, NetworkInfo, RandomCardResponse, NEVER_CACHE};
use cc_numbers::{parse, CardReport, Network};
use serde::de::DeserializeOwned;
use std::io;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

async fn get(app: Router, uri: &str) -> (StatusCode, header::HeaderMap, Vec<u8>) {
    get_with_headers(app, uri, &[]).await
}

async fn get_with_headers(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, header::HeaderMap, Vec<u8>) {
    let mut builder = Request::builder()
        .uri(uri)
        .header(header::HOST, "cards.example.test");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

fn json<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_validation_valid_number() {
    let (status, _, body) = get(router(), "/validation/4111111111111111").await;
    assert_eq!(status, StatusCode::OK);

    let report: CardReport = json(&body);
    assert!(report.is_valid);
    assert_eq!(report.major_industry_identifier, "4");
    assert_eq!(report.issuer_identification_number, "411111");
    assert_eq!(report.personal_account_number, "111111111");
    assert_eq!(report.check_digit, "1");
    assert_eq!(report.network, "visa");
}

#[tokio::test]
async fn test_validation_with_separators() {
    let (status, _, body) = get(router(), "/validation/3782-822463-10005").await;
    assert_eq!(status, StatusCode::OK);
    let report: CardReport = json(&body);
    assert_eq!(report.network, "amex");
    assert!(report.is_valid);

    // Percent-encoded spaces
    let (status, _, _) = get(router(), "/validation/4111%201111%201111%201111").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_validation_inconsistent_number_is_ok_but_invalid() {
    let (status, _, body) = get(router(), "/validation/123456789012").await;
    assert_eq!(status, StatusCode::OK);

    let report: CardReport = json(&body);
    assert!(!report.is_valid);
    assert_eq!(report.personal_account_number, "78901");
    assert_eq!(report.network, "unknown");
}

#[tokio::test]
async fn test_validation_malformed_number() {
    let (status, _, body) = get(router(), "/validation/4111-11a1-1111-1111").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json(&body);
    assert!(error.error.contains("position 7"));

    let (status, _, body) = get(router(), "/validation/41111111111").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json(&body);
    assert_eq!(
        error.error,
        "A card number must be between 12 and 19 digits (got 11)."
    );
}

#[tokio::test]
async fn test_random_with_network() {
    let (status, headers, body) = get(router(), "/random?network=amex").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CACHE_CONTROL], NEVER_CACHE);

    let response: RandomCardResponse = json(&body);
    assert_eq!(response.card_number.len(), 15);
    assert_eq!(
        response.validation_link,
        format!(
            "http://cards.example.test/validation/{}",
            response.card_number
        )
    );

    let card = parse(&response.card_number).unwrap();
    assert!(card.is_valid());
    assert_eq!(card.network(), Some(Network::Amex));
}

#[tokio::test]
async fn test_random_without_network() {
    for uri in ["/random", "/random?network="] {
        let (status, headers, body) = get(router(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(headers[header::CACHE_CONTROL], NEVER_CACHE);

        let response: RandomCardResponse = json(&body);
        let card = parse(&response.card_number).unwrap();
        assert!(card.is_valid());
        assert!(card.has_network_length());
    }
}

#[tokio::test]
async fn test_random_unknown_network() {
    let (status, headers, body) = get(router(), "/random?network=bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[header::CACHE_CONTROL], NEVER_CACHE);

    let error: ErrorResponse = json(&body);
    assert_eq!(
        error.error,
        "Invalid network 'bogus'. Valid values are visa, mastercard, amex, discover, diners, jcb."
    );
}

#[tokio::test]
async fn test_networks() {
    let (status, _, body) = get(router(), "/networks").await;
    assert_eq!(status, StatusCode::OK);

    let networks: Vec<NetworkInfo> = json(&body);
    let names: Vec<&str> = networks.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        ["visa", "mastercard", "amex", "discover", "diners", "jcb"]
    );
    assert_eq!(networks[0].lengths, vec![13, 16]);
    assert_eq!(networks[0].iin_ranges, vec!["400000-499999"]);
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = get(router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = json(&body);
    assert_eq!(value["status"], "ok");
}

#[tokio::test]
async fn test_openapi_document() {
    let (status, _, body) = get(router(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = json(&body);
    assert!(value["paths"]["/validation/{card_number}"].is_object());
    assert!(value["paths"]["/random"].is_object());
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _, _) = get(router(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_random_link_follows_forwarded_scheme() {
    let (_, _, body) = get_with_headers(
        router(),
        "/random?network=visa",
        &[("x-forwarded-proto", "https")],
    )
    .await;
    let response: RandomCardResponse = json(&body);
    assert_eq!(
        response.validation_link,
        format!(
            "https://cards.example.test/validation/{}",
            response.card_number
        )
    );

    // Only http and https are honoured
    let (_, _, body) = get_with_headers(
        router(),
        "/random?network=visa",
        &[("x-forwarded-proto", "javascript")],
    )
    .await;
    let response: RandomCardResponse = json(&body);
    assert!(response.validation_link.starts_with("http://cards.example.test/"));
}

/// In-memory log sink for a scoped subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_request_logs_never_contain_card_number() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let (status, _, _) = get(router(), "/validation/4012888888881881").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = get(router(), "/validation/4012-8888-8888-1881").await;
    assert_eq!(status, StatusCode::OK);

    let output = logs.contents();
    assert!(output.contains("started processing request"), "{output}");
    assert!(output.contains("/validation/:card_number"), "{output}");
    assert!(output.contains("401288******1881"), "{output}");
    assert!(!output.contains("4012888888881881"), "{output}");
    assert!(!output.contains("4012-8888-8888-1881"), "{output}");
}
