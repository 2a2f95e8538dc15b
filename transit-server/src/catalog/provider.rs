//! Timetable sources.
//!
//! The planner only needs a materialized [`Timetable`]; where it comes from
//! is decided by a [`CatalogProvider`] at startup.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::timetable::Timetable;

/// The island timetable shipped with the server.
const EMBEDDED_TIMETABLE: &str = include_str!("../../data/timetable.json");

/// Errors from loading a timetable.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The timetable file could not be read
    #[error("failed to read timetable {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The timetable document is malformed (bad JSON, times or prices)
    #[error("invalid timetable document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of the route catalog and fare schedule.
pub trait CatalogProvider {
    /// Load the timetable.
    fn load(&self) -> Result<Timetable, CatalogError>;
}

/// The built-in timetable compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogProvider for EmbeddedCatalog {
    fn load(&self) -> Result<Timetable, CatalogError> {
        let timetable: Timetable = serde_json::from_str(EMBEDDED_TIMETABLE)?;
        debug!(
            routes = timetable.routes().len(),
            "loaded embedded timetable"
        );
        Ok(timetable)
    }
}

/// A timetable document on disk, in the same format as the embedded one.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for FileCatalog {
    fn load(&self) -> Result<Timetable, CatalogError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let timetable: Timetable = serde_json::from_str(&contents)?;
        info!(
            path = %self.path.display(),
            routes = timetable.routes().len(),
            "loaded timetable from file"
        );
        Ok(timetable)
    }
}
