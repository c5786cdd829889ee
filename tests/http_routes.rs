//! Route-level tests driving the router in-process.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

use monkeylines::generator::{Exchange, PLACEHOLDER};
use monkeylines::http::X_REQUEST_ID;
use monkeylines::{HttpServer, MonkeyConfig};

mod common;

fn app() -> Router {
    HttpServer::new(MonkeyConfig::default()).router()
}

async fn get(path: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let res = app()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let body = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn exchange_is_json_with_both_fields() {
    let (status, headers, body) = get("/exchange").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");

    let exchange: Exchange = serde_json::from_str(&body).unwrap();
    assert!(!exchange.insult.is_empty());
    assert!(!exchange.comeback.is_empty());

    let raw: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(raw.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn plain_text_routes_return_one_line() {
    for path in ["/line", "/insult", "/comeback"] {
        let (status, headers, body) = get(path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(headers[header::CONTENT_TYPE], "text/plain; charset=utf-8", "{path}");
        assert!(body.ends_with('\n'), "{path}: {body:?}");
        assert_eq!(body.matches('\n').count(), 1, "{path}: {body:?}");
        assert!(!body.contains(PLACEHOLDER));
    }
}

#[tokio::test]
async fn insult_and_comeback_routes_serve_their_own_kind() {
    let sentences = common::sentences();

    for _ in 0..20 {
        let (_, _, body) = get("/insult").await;
        let line = body.trim_end_matches('\n');
        assert!(sentences.insults.contains(line), "not an insult: {body:?}");

        let (_, _, body) = get("/comeback").await;
        let line = body.trim_end_matches('\n');
        assert!(sentences.comebacks.contains(line), "not a comeback: {body:?}");

        let (_, _, body) = get("/line").await;
        assert!(sentences.contains(body.trim_end_matches('\n')), "{body:?}");
    }
}

#[tokio::test]
async fn index_is_html_with_a_message() {
    let (status, headers, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
    assert!(body.contains("<p class=\"scroll\">"));
    assert!(body.contains("telnet localhost 8023"));
    assert!(!body.contains("{{"));
    assert!(!body.contains(PLACEHOLDER));
}

#[tokio::test]
async fn index_advertises_host_from_request() {
    let res = app()
        .oneshot(
            Request::get("/")
                .header(header::HOST, "monkey.example:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("telnet monkey.example 8023"));
}

#[tokio::test]
async fn images_are_cached_and_typed() {
    let (status, headers, body) = get("/images/monkey.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=604800");
    assert!(body.starts_with("<svg"));

    let (status, _, _) = get("/images/nope.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let (status, _, _) = get("/does/not/exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_security_headers_and_request_id() {
    for path in ["/", "/line", "/exchange", "/images/monkey.svg", "/missing"] {
        let (_, headers, _) = get(path).await;
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff", "{path}");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY", "{path}");
        assert_eq!(headers[header::REFERRER_POLICY], "no-referrer", "{path}");
        assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY), "{path}");
        assert!(headers.contains_key(X_REQUEST_ID), "{path}");
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, _, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[test]
fn rejected_bodies_are_still_counted() {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    metrics::with_local_recorder(&recorder, || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async {
            let mut config = MonkeyConfig::default();
            config.security.max_body_size = 16;
            let res = HttpServer::new(config)
                .router()
                .oneshot(
                    Request::post("/line")
                        .header(header::CONTENT_LENGTH, "1024")
                        .body(Body::from(vec![b'x'; 1024]))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

            let res = app()
                .oneshot(Request::get("/line").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
        });
    });

    let rendered = handle.render();
    let counted = |route: &str, status: &str| {
        rendered.lines().any(|line| {
            line.starts_with("monkeylines_http_requests_total")
                && line.contains(&format!("route=\"{route}\""))
                && line.contains(&format!("status=\"{status}\""))
        })
    };
    assert!(counted("unmatched", "413"), "{rendered}");
    assert!(counted("/line", "200"), "{rendered}");
}
