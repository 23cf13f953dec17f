pub mod handler;

use axum::Router;
use std::sync::Arc;

use crate::data::ProtocolSource;

/// State shared by every request. Immutable once the server starts.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ProtocolSource>,
}

impl AppState {
    pub fn new(source: impl ProtocolSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

/// Builds the router. Every path is served by the merge handler, which only
/// looks at the last non-empty path segment.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(handler::merge_tvl)
        .with_state(state)
}
