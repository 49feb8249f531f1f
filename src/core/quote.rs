//! Live quote abstractions and core types

use crate::core::delta::{self, Delta};
use crate::core::error::ScrapeError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Snapshot of one asset's live price. Fields the page did not expose are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: Option<f64>,
    pub previous_close: Option<f64>,
    pub change_abs: Option<f64>,
    pub change_pct: Option<f64>,
}

impl Quote {
    pub fn new(price: Option<f64>, previous_close: Option<f64>) -> Self {
        let Delta {
            change_abs,
            change_pct,
        } = delta::compute(price, previous_close);
        Self {
            price,
            previous_close,
            change_abs,
            change_pct,
        }
    }

    /// The placeholder shown before the first fetch of a session.
    pub fn zero() -> Self {
        Self {
            price: Some(0.0),
            previous_close: None,
            change_abs: Some(0.0),
            change_pct: Some(0.0),
        }
    }
}

/// A fetched quote together with the raw detail values listed on the page
/// (previous close, day range, year range, ...), in page order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotePage {
    pub quote: Quote,
    pub details: Vec<String>,
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<QuotePage, ScrapeError>;
}
