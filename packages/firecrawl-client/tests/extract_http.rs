// HTTP-level tests for FirecrawlClient::extract against a throwaway axum server.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use firecrawl_client::{FirecrawlClient, FirecrawlConfig, FirecrawlError};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct RecordedRequest {
    authorization: Option<String>,
    content_type: Option<String>,
    body: serde_json::Value,
}

struct MockFirecrawl {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

async fn scrape(
    State(mock): State<Arc<MockFirecrawl>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    mock.requests.lock().unwrap().push(RecordedRequest {
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    });
    (mock.status, mock.body.clone())
}

async fn serve(status: StatusCode, body: &str) -> (SocketAddr, Arc<MockFirecrawl>) {
    let mock = Arc::new(MockFirecrawl {
        status,
        body: body.to_string(),
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/v1/scrape", post(scrape))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    (addr, mock)
}

fn client_for(addr: SocketAddr) -> FirecrawlClient {
    FirecrawlClient::new(FirecrawlConfig::with_api_url(
        "fc-test-key",
        format!("http://{}/", addr),
    ))
}

#[tokio::test]
async fn test_extract_returns_populated_profile() {
    let (addr, mock) = serve(
        StatusCode::OK,
        r#"{"success":true,"data":{"metadata":{"title":"Acme","description":"Acme Inc"},"extract":{"company_description":"Acme sells widgets.","product_summary":"Widgets and gadgets."}}}"#,
    )
    .await;

    let extraction = client_for(addr)
        .extract("https://acme.test")
        .await
        .expect("extraction should succeed");

    assert_eq!(extraction.profile.company_description, "Acme sells widgets.");
    assert_eq!(extraction.profile.product_summary, "Widgets and gadgets.");
    assert_eq!(
        extraction.metadata.and_then(|m| m.title).as_deref(),
        Some("Acme")
    );
    assert_eq!(mock.requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_extract_sends_authenticated_json_request() {
    let (addr, mock) = serve(
        StatusCode::OK,
        r#"{"success":true,"data":{"extract":{"company_description":"a","product_summary":"b"}}}"#,
    )
    .await;

    client_for(addr).extract("https://acme.test").await.unwrap();

    let requests = mock.requests.lock().unwrap();
    let request = &requests[0];
    assert_eq!(request.authorization.as_deref(), Some("Bearer fc-test-key"));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(request.body["url"], "https://acme.test");
    assert_eq!(request.body["formats"], serde_json::json!(["extract"]));
    assert_eq!(
        request.body["extract"]["schema"]["required"],
        serde_json::json!(["company_description", "product_summary"])
    );
}

#[tokio::test]
async fn test_success_false_is_extraction_denied() {
    let (addr, _mock) = serve(StatusCode::OK, r#"{"success":false}"#).await;

    let err = client_for(addr).extract("https://acme.test").await.unwrap_err();
    assert!(matches!(
        err,
        FirecrawlError::ExtractionDenied {
            status: 200,
            message: None
        }
    ));
}

#[tokio::test]
async fn test_error_status_with_denial_body_is_extraction_denied() {
    let (addr, _mock) = serve(
        StatusCode::PAYMENT_REQUIRED,
        r#"{"success":false,"error":"Insufficient credits"}"#,
    )
    .await;

    let err = client_for(addr).extract("https://acme.test").await.unwrap_err();
    match err {
        FirecrawlError::ExtractionDenied { status, message } => {
            assert_eq!(status, 402);
            assert_eq!(message.as_deref(), Some("Insufficient credits"));
        }
        other => panic!("expected ExtractionDenied, got {:?}", other),
    }
}

#[tokio::test]
async fn test_denial_with_structured_error_and_odd_data_is_extraction_denied() {
    let (addr, _mock) = serve(
        StatusCode::BAD_REQUEST,
        r#"{"success":false,"error":{"code":"BAD","message":"x"},"data":"unavailable"}"#,
    )
    .await;

    let err = client_for(addr).extract("https://acme.test").await.unwrap_err();
    match err {
        FirecrawlError::ExtractionDenied { status, message } => {
            assert_eq!(status, 400);
            assert!(message.unwrap().contains("BAD"));
        }
        other => panic!("expected ExtractionDenied, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_description_is_incomplete_extraction() {
    let (addr, _mock) = serve(
        StatusCode::OK,
        r#"{"success":true,"data":{"extract":{"company_description":"","product_summary":"Widgets."}}}"#,
    )
    .await;

    let err = client_for(addr).extract("https://acme.test").await.unwrap_err();
    assert!(matches!(
        err,
        FirecrawlError::IncompleteExtraction {
            field: "company_description"
        }
    ));
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let (addr, _mock) = serve(StatusCode::OK, r#"{"success": tru"#).await;

    let err = client_for(addr).extract("https://acme.test").await.unwrap_err();
    assert!(matches!(err, FirecrawlError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn test_html_error_page_is_decode_error() {
    let (addr, _mock) = serve(
        StatusCode::BAD_GATEWAY,
        "<html><body>Bad Gateway</body></html>",
    )
    .await;

    let err = client_for(addr).extract("https://acme.test").await.unwrap_err();
    assert!(matches!(err, FirecrawlError::Decode { status: 502, .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).extract("https://acme.test").await.unwrap_err();
    assert!(matches!(err, FirecrawlError::Transport(_)));
    assert_eq!(err.kind(), "transport");
}
