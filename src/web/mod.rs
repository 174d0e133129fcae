pub mod api;
pub mod overview;
pub mod views;

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::directory::Directory;
use crate::models::Config;

#[derive(Clone)]
pub(crate) struct AppState {
    directory: Arc<Mutex<Directory>>,
}

impl AppState {
    pub(crate) fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(Mutex::new(directory)),
        }
    }

    /// Every read and mutation goes through this one lock.
    pub(crate) fn directory(&self) -> MutexGuard<'_, Directory> {
        self.directory.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub(crate) fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(overview::overview_handler))
        .route("/activities", get(api::list_activities))
        .route("/activities/{activity_name}/signup", post(api::sign_up))
        .route("/activities/{activity_name}/unregister", post(api::unregister))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: &Config, addr: &str) -> Result<()> {
    let directory = Directory::seeded();
    info!("Loaded {} activities", directory.len());
    let app = router(AppState::new(directory), &config.server.static_dir);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Activities API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
