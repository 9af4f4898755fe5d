//! Application state.

use deepfake_core::{Scorer, Settings};
use std::sync::Arc;

/// Application state shared across handlers.
///
/// Built once at startup; the scorer is read-only and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<dyn Scorer>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(scorer: Arc<dyn Scorer>, settings: Settings) -> Self {
        Self {
            scorer,
            settings: Arc::new(settings),
        }
    }
}
