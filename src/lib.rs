pub mod app;
pub mod errors;
pub mod handlers;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod smoothing;
pub mod state;
pub mod ui;

pub use app::router;
pub use state::AppState;
