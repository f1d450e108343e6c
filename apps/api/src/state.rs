use std::sync::Arc;

use crate::engine::CareerEngine;
use crate::errors::AppError;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The Gemini engine, constructed once at process start. `None` when
    /// GEMINI_API_KEY was missing; handlers translate that into the
    /// engine-unavailable envelope instead of panicking.
    pub engine: Option<Arc<dyn CareerEngine>>,
}

impl AppState {
    /// Returns the engine, or the error every endpoint maps a missing
    /// engine to.
    pub fn engine(&self) -> Result<&dyn CareerEngine, AppError> {
        self.engine.as_deref().ok_or(AppError::EngineUnavailable)
    }
}
