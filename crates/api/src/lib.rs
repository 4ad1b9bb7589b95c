//! vidtrack HTTP API.
//!
//! Thin handlers around the progress engine: each request loads a video from
//! the store, asks the engine for phase and progress, and serialises the
//! result as JSON.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use vidtrack_storage::{KeyLocks, VideoStore};

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Video record store
    pub store: Arc<dyn VideoStore>,
    /// Serialises read-modify-write sequences per video
    pub locks: Arc<KeyLocks>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self {
            store,
            locks: Arc::new(KeyLocks::new()),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, put};

    let videos = Router::new()
        .route("/api/videos", get(api::list_videos).post(api::create_video))
        .route("/api/videos/phases", get(api::list_phases))
        .route(
            "/api/videos/:name",
            get(api::get_video)
                .put(api::replace_video)
                .delete(api::delete_video),
        )
        .route("/api/videos/:name/:section", put(api::update_section))
        .route("/api/editing/aspects", get(api::get_aspects));

    Router::new()
        .merge(videos)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
