//! Playlist Server
//!
//! Layered architecture:
//! - domain: Playlist entity and domain errors
//! - repository: Playlist sources (JSON file, in-memory)
//! - format: Trimming playlists to the keys the front-end uses
//! - routes: axum handlers and router
//! - config: Environment-driven settings

use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod format;
pub mod repository;
pub mod routes;

use config::ServerConfig;
use domain::Playlist;
use repository::{InMemoryRepository, JsonFileRepository, Repository};
use routes::AppState;

/// Pick the playlist source named by the config
pub fn build_repository(config: &ServerConfig) -> Arc<dyn Repository<Playlist>> {
    match &config.playlists_file {
        Some(path) => {
            let repo = JsonFileRepository::new(path.clone());
            log::info!("Serving playlists from {}", repo.path().display());
            Arc::new(repo)
        }
        None => {
            log::warn!("PLAYLISTS_FILE not set, serving an empty playlist listing");
            Arc::new(InMemoryRepository::default())
        }
    }
}

/// Bind and serve until Ctrl-C
pub async fn run(config: ServerConfig) -> Result<(), String> {
    let state = AppState::new(build_repository(&config), config.relevant_keys.clone());
    let app = routes::router(state, &config.static_dir);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;

    log::info!(
        "Playlist server listening on {} (static dir {})",
        addr,
        config.static_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    log::info!("Playlist server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown signal received"),
        Err(e) => log::error!("Failed to listen for shutdown signal: {}", e),
    }
}
