use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/upload", post(handlers::upload))
        .route("/api/preview", get(handlers::preview))
        .route("/api/forecast", post(handlers::forecast))
        .with_state(state)
}
