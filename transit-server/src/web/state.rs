//! Application state for the web layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::Timetable;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Routes and fares
    pub timetable: Arc<Timetable>,

    /// Journey planner configuration
    pub config: Arc<PlannerConfig>,

    /// Printable timetable PDF
    pub pdf_path: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: Timetable, config: PlannerConfig, pdf_path: impl Into<PathBuf>) -> Self {
        Self {
            timetable: Arc::new(timetable),
            config: Arc::new(config),
            pdf_path: Arc::new(pdf_path.into()),
        }
    }
}
