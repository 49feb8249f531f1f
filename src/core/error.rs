//! Error taxonomy shared by the loader, scraper and page controller.

use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Failures of a single quote page fetch.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ScrapeError {
    #[error("HTTP error: {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Request error: {reason} for {url}")]
    Network { reason: String, url: String },

    #[error("Could not convert {field} value '{text}' to a number")]
    Parse { field: &'static str, text: String },
}

impl ScrapeError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ScrapeError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to load {}: row {row}: {reason}", path.display())]
    Load {
        path: PathBuf,
        row: usize,
        reason: String,
    },

    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid interval: {0} (expected Day, Month or Year)")]
    InvalidInterval(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
