//! HTTP Routes
//!
//! - `POST /playlists`: formatted playlist listing (request body ignored)
//! - `GET /health`: liveness check
//! - `GET /`: the front-end's index page; other paths fall back to the
//!   static directory

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Map, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::domain::{DomainError, Playlist};
use crate::format::format_playlists;
use crate::repository::Repository;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository<Playlist>>,
    pub relevant_keys: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn Repository<Playlist>>, relevant_keys: Vec<String>) -> Self {
        Self {
            repo,
            relevant_keys: Arc::new(relevant_keys),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            DomainError::InvalidPlaylist(_) => (StatusCode::INTERNAL_SERVER_ERROR, "invalid_playlist"),
            DomainError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        let body = Json(ErrorBody {
            code,
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub fn router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/playlists", post(list_playlists))
        .route("/health", get(health_check))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

async fn list_playlists(State(state): State<AppState>) -> Result<Json<Vec<Map<String, Value>>>, DomainError> {
    let playlists = state.repo.list().await.map_err(|e| {
        log::error!("Failed to list playlists: {}", e);
        e
    })?;
    log::info!("Serving {} playlists", playlists.len());
    Ok(Json(format_playlists(&playlists, &state.relevant_keys)))
}

async fn health_check() -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "playlist-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryRepository, JsonFileRepository};
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;

    fn default_keys() -> Vec<String> {
        vec!["name".to_string(), "tracks".to_string()]
    }

    fn app_with(repo: Arc<dyn Repository<Playlist>>, static_dir: &Path) -> Router {
        router(AppState::new(repo, default_keys()), static_dir)
    }

    fn post_playlists() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/playlists")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_playlists_formats_records() {
        let dir = tempfile::tempdir().unwrap();
        let repo = InMemoryRepository::from_values(vec![
            json!({"id": "1", "name": "Road Trip", "tracks": {"total": 12}, "owner": "me"}),
            json!({"id": "2", "name": "Focus"}),
        ])
        .unwrap();
        let app = app_with(Arc::new(repo), dir.path());

        let response = app.oneshot(post_playlists()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            json!([{"name": "Road Trip", "tracks": {"total": 12}}, {"name": "Focus"}])
        );
    }

    #[tokio::test]
    async fn test_post_playlists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(Arc::new(InMemoryRepository::default()), dir.path());

        let response = app.oneshot(post_playlists()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_post_playlists_ignores_request_body() {
        let dir = tempfile::tempdir().unwrap();
        let repo = InMemoryRepository::from_values(vec![json!({"name": "A"})]).unwrap();
        let app = app_with(Arc::new(repo), dir.path());

        let request = Request::builder()
            .method("POST")
            .uri("/playlists")
            .body(Body::from("not even json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([{"name": "A"}]));
    }

    #[tokio::test]
    async fn test_broken_source_returns_500() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("playlists.json");
        std::fs::write(&source, "{ broken").unwrap();
        let app = app_with(Arc::new(JsonFileRepository::new(source)), dir.path());

        let response = app.oneshot(post_playlists()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["code"], "internal");
        assert!(body["message"].as_str().unwrap().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn test_non_object_entry_returns_500() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("playlists.json");
        std::fs::write(&source, r#"[{"name":"ok"}, 3]"#).unwrap();
        let app = app_with(Arc::new(JsonFileRepository::new(source)), dir.path());

        let response = app.oneshot(post_playlists()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["code"], "invalid_playlist");
        assert!(body["message"].as_str().unwrap().starts_with("Invalid playlist"));
    }

    #[tokio::test]
    async fn test_get_playlists_not_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(Arc::new(InMemoryRepository::default()), dir.path());

        let request = Request::builder().uri("/playlists").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_index_and_static_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>menu</html>").unwrap();
        std::fs::write(dir.path().join("styles.css"), "#app {}").unwrap();
        let app = app_with(Arc::new(InMemoryRepository::default()), dir.path());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>menu</html>");

        let response = app
            .oneshot(Request::builder().uri("/styles.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with(Arc::new(InMemoryRepository::default()), dir.path());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    /// Shared buffer the test subscriber writes into
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_requests_logged_at_info() {
        let captured = CapturedLog::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let dir = tempfile::tempdir().unwrap();
        let app = app_with(Arc::new(InMemoryRepository::default()), dir.path());
        let response = app.oneshot(post_playlists()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("finished processing request"), "{}", output);
        assert!(output.contains("/playlists"), "{}", output);
    }

    #[test]
    fn test_domain_error_status_codes() {
        let response = DomainError::InvalidPlaylist("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = DomainError::Internal("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
