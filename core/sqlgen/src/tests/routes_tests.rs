//! ルーターのテスト（tower::ServiceExt::oneshotで1リクエストずつ流す）

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::error::Error;

use crate::adapter::StubGenerator;
use crate::server::{router, AppState};
use crate::usecase::GenerateUseCase;

fn app_with(stub: StubGenerator) -> axum::Router {
    let usecase = GenerateUseCase::new(Arc::new(stub));
    router(AppState::new(Arc::new(usecase)))
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_serves_page() {
    let app = app_with(StubGenerator::with_texts(&[]));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Gerador de Queries SQL com IA"));
    assert!(body.contains("Gerar Query SQL"));
}

#[tokio::test]
async fn test_generate_short_description_returns_warning() {
    let app = app_with(StubGenerator::with_texts(&["should not be used"]));
    let response = app
        .oneshot(json_request("/api/generate", json!({"description": "curto"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("descrição mais detalhada"));
}

#[tokio::test]
async fn test_generate_end_to_end() {
    let app = app_with(StubGenerator::with_texts(&[
        "SELECT * FROM customers WHERE country = 'Brazil';",
        "10 rows",
        "Filters customers by country.",
    ]));
    let response = app
        .oneshot(json_request(
            "/api/generate",
            json!({"description": "list all customers from Brazil"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        body["sql_query"].as_str().unwrap(),
        "SELECT * FROM customers WHERE country = 'Brazil';"
    );
    assert_eq!(body["expected_output"].as_str().unwrap(), "10 rows");
    assert_eq!(
        body["explanation"].as_str().unwrap(),
        "Filters customers by country."
    );
}

#[tokio::test]
async fn test_generate_failure_returns_error_banner() {
    let app = app_with(StubGenerator::new(vec![Err(Error::http(
        "Gemini API error: quota exceeded",
    ))]));
    let response = app
        .oneshot(json_request(
            "/api/generate",
            json!({"description": "list all customers from Brazil"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_string(response).await;
    assert!(body.contains("Erro ao gerar resposta"));
    assert!(body.contains("quota exceeded"));
}

#[tokio::test]
async fn test_generate_partial_failure_returns_nulls() {
    let app = app_with(StubGenerator::new(vec![
        Ok("SELECT 1".to_string()),
        Err(Error::http("down")),
        Err(Error::http("down")),
    ]));
    let response = app
        .oneshot(json_request(
            "/api/generate",
            json!({"description": "list all customers from Brazil"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["sql_query"].as_str().unwrap(), "SELECT 1");
    assert!(body["expected_output"].is_null());
    assert!(body["explanation"].is_null());
}

#[tokio::test]
async fn test_download_builds_document_with_headers() {
    let app = app_with(StubGenerator::with_texts(&[]));
    let response = app
        .oneshot(json_request(
            "/api/download",
            json!({
                "sql_query": "SELECT 1",
                "expected_output": "1 row",
                "explanation": "trivial"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"dsa_resultado_query.sql\""
    );

    let body = body_string(response).await;
    let q = body.find("Consulta SQL:\nSELECT 1").unwrap();
    let e = body.find("Saída Esperada:\n1 row").unwrap();
    let x = body.find("Explicação:\ntrivial").unwrap();
    assert!(q < e && e < x);
}

#[tokio::test]
async fn test_download_tolerates_missing_fields() {
    // null/欠落フィールドは空文字列として連結される（クラッシュしない）
    let app = app_with(StubGenerator::with_texts(&[]));
    let response = app
        .oneshot(json_request("/api/download", json!({"sql_query": "SELECT 1"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Consulta SQL:\nSELECT 1"));
    assert!(body.contains("Saída Esperada:\n"));
    assert!(body.contains("Explicação:\n"));
}

#[tokio::test]
async fn test_health() {
    let app = app_with(StubGenerator::with_texts(&[]));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"].as_str().unwrap(), "ok");
}
