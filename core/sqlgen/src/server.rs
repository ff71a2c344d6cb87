//! HTTPサーバー（プレゼンテーション層）
//!
//! 1ページのUIとJSON APIを提供します。生成はブロッキングのため
//! `spawn_blocking`上で実行し、3回の呼び出しは逐次のまま保ちます。

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::bundle::{ResultBundle, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use crate::page;
use crate::usecase::GenerateUseCase;

/// ハンドラ間で共有されるアプリケーション状態
pub struct AppState {
    usecase: Arc<GenerateUseCase>,
}

impl AppState {
    pub fn new(usecase: Arc<GenerateUseCase>) -> Self {
        Self { usecase }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

type AppStateArc = Arc<AppState>;

/// 生成リクエスト
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub description: String,
}

/// ダウンロードリクエスト
///
/// どのフィールドも欠けてよい（欠けた値は空文字列として連結される）
#[derive(Debug, Default, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub sql_query: Option<String>,
    #[serde(default)]
    pub expected_output: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// ルーターを組み立てる
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/generate", post(generate))
        .route("/api/download", post(download))
        .route("/api/health", get(health))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// HTTPサーバーを起動する
pub async fn run(state: AppState, host: &str, port: u16) -> Result<()> {
    let app = router(state);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

async fn generate(
    State(state): State<AppStateArc>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<ResultBundle>, (StatusCode, String)> {
    let usecase = Arc::clone(&state.usecase);

    // ブロッキングHTTPクライアントをランタイムから隔離する
    let result = tokio::task::spawn_blocking(move || usecase.run(&req.description))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("generation task failed: {}", e),
            )
        })?;

    match result {
        Ok(bundle) => {
            info!("generation succeeded");
            Ok(Json(bundle))
        }
        Err(e) if e.is_validation() => Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string())),
        Err(e) => Err((
            StatusCode::BAD_GATEWAY,
            format!("Erro ao gerar resposta: {}", e),
        )),
    }
}

async fn download(Json(req): Json<DownloadRequest>) -> impl IntoResponse {
    let bundle = ResultBundle {
        sql_query: req.sql_query.unwrap_or_default(),
        expected_output: req.expected_output,
        explanation: req.explanation,
    };
    let document = bundle.render_document();

    (
        [
            (header::CONTENT_TYPE, EXPORT_MIME_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        document,
    )
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
