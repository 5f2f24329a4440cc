use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use doh_relay_api::{create_api_routes, AppState};
use doh_relay_application::ports::DohResolverPort;
use doh_relay_application::use_cases::ResolveDomainUseCase;
use doh_relay_domain::{Answer, AnswerRecord, DnsQuery, DomainError, Question};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

struct FakeResolver {
    outcome: Result<(), DomainError>,
    seen: Mutex<Vec<(String, String)>>,
}

impl FakeResolver {
    fn ok() -> Self {
        Self {
            outcome: Ok(()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(err: DomainError) -> Self {
        Self {
            outcome: Err(err),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<(String, String)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl DohResolverPort for FakeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Answer, DomainError> {
        self.seen
            .lock()
            .unwrap()
            .push((query.domain.to_string(), query.record_type.to_string()));
        match &self.outcome {
            Ok(()) => Ok(Answer {
                status: "NOERROR".to_string(),
                question: Question::new(query.domain.to_string(), query.record_type),
                records: vec![AnswerRecord {
                    name: format!("{}.", query.domain),
                    record_type: query.record_type.as_str().to_string(),
                    ttl: 300,
                    data: "192.0.2.1".to_string(),
                }],
            }),
            Err(e) => Err(e.clone()),
        }
    }
}

fn app(resolver: Arc<FakeResolver>) -> Router {
    create_api_routes(AppState {
        resolve: Arc::new(ResolveDomainUseCase::new(resolver)),
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn resolves_and_returns_dns_json_shape() {
    let resolver = Arc::new(FakeResolver::ok());
    let (status, body) = get(app(resolver), "/resolve?url=example.com&type=AAAA").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], "NOERROR");
    assert_eq!(body["Question"][0]["name"], "example.com");
    assert_eq!(body["Question"][0]["type"], "AAAA");
    assert_eq!(body["Answer"][0]["data"], "192.0.2.1");
    assert_eq!(body["Answer"][0]["ttl"], 300);
}

#[tokio::test]
async fn record_type_defaults_to_a() {
    let resolver = Arc::new(FakeResolver::ok());
    let (status, _) = get(app(resolver.clone()), "/resolve?url=example.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resolver.seen(), vec![("example.com".to_string(), "A".to_string())]);
}

#[tokio::test]
async fn missing_url_is_bad_request() {
    let resolver = Arc::new(FakeResolver::ok());
    let (status, body) = get(app(resolver.clone()), "/resolve").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("url"));
    assert!(resolver.seen().is_empty());
}

#[tokio::test]
async fn unknown_record_type_is_bad_request_naming_the_type() {
    let resolver = Arc::new(FakeResolver::ok());
    let (status, body) = get(app(resolver.clone()), "/resolve?url=example.com&type=BOGUS").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("BOGUS"));
    assert!(resolver.seen().is_empty());
}

#[tokio::test]
async fn transport_failure_is_service_unavailable() {
    let resolver = Arc::new(FakeResolver::failing(
        DomainError::TransportConnectionFailed {
            server: "https://dns.example/dns-query".to_string(),
            reason: "connection refused".to_string(),
        },
    ));
    let (status, body) = get(app(resolver), "/resolve?url=example.com").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["detail"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn upstream_error_status_is_bad_gateway() {
    let resolver = Arc::new(FakeResolver::failing(DomainError::UpstreamHttpStatus {
        server: "https://dns.example/dns-query".to_string(),
        status: 500,
        body: "upstream broke".to_string(),
    }));
    let (status, body) = get(app(resolver), "/resolve?url=example.com").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn malformed_upstream_answer_is_internal_error() {
    let resolver = Arc::new(FakeResolver::failing(DomainError::MalformedMessage(
        "truncated response".to_string(),
    )));
    let (status, _) = get(app(resolver), "/resolve?url=example.com").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let resolver = Arc::new(FakeResolver::ok());
    let (status, body) = get(app(resolver), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
