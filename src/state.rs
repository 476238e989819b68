use crate::models::Series;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Per-process session state: the one uploaded series, nothing persisted.
/// Every forecast request recomputes the whole pipeline from this.
#[derive(Clone, Default)]
pub struct AppState {
    pub series: Arc<Mutex<Option<Series>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
