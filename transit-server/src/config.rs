//! Server configuration, read from environment variables.
//!
//! | Variable                 | Default                 |
//! |--------------------------|-------------------------|
//! | `TRANSIT_BIND_ADDR`      | `127.0.0.1:3000`        |
//! | `TRANSIT_TIMETABLE_PATH` | built-in timetable      |
//! | `TRANSIT_PDF_PATH`       | `public/timetables.pdf` |
//! | `TRANSIT_STATIC_DIR`     | `static`                |

use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "TRANSIT_BIND_ADDR";
pub const TIMETABLE_PATH_VAR: &str = "TRANSIT_TIMETABLE_PATH";
pub const PDF_PATH_VAR: &str = "TRANSIT_PDF_PATH";
pub const STATIC_DIR_VAR: &str = "TRANSIT_STATIC_DIR";

/// Error reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Timetable JSON file; `None` uses the built-in timetable
    pub timetable_path: Option<PathBuf>,

    /// Printable timetable served at `/api/timetable-pdf`
    pub pdf_path: PathBuf,

    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

pub fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

pub fn default_pdf_path() -> PathBuf {
    PathBuf::from("public/timetables.pdf")
}

pub fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            timetable_path: None,
            pdf_path: default_pdf_path(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration using `lookup` to resolve variables.
    ///
    /// Unset and empty variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr = match get(BIND_ADDR_VAR) {
            Some(value) => value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::Invalid {
                    var: BIND_ADDR_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => default_bind_addr(),
        };

        Ok(Self {
            bind_addr,
            timetable_path: get(TIMETABLE_PATH_VAR).map(PathBuf::from),
            pdf_path: get(PDF_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_pdf_path),
            static_dir: get(STATIC_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_static_dir),
        })
    }
}
