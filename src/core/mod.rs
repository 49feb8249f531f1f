//! Core dashboard logic: series, resampling, quotes, charts and page state

pub mod cache;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod delta;
pub mod error;
pub mod log;
pub mod page;
pub mod quote;
pub mod resample;
pub mod series;
pub mod session;

// Re-export main types for cleaner imports
pub use catalog::{AssetCatalog, AssetEntry, IndexCategory};
pub use error::{DashboardError, ScrapeError};
pub use quote::{Quote, QuotePage, QuoteProvider};
pub use series::{Interval, TimeSeriesRow};
