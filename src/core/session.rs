//! Per-session dashboard state, owned by the caller and handed to every render pass.

use crate::core::catalog::IndexCategory;
use crate::core::error::{DashboardError, ScrapeError};
use crate::core::quote::{Quote, QuotePage};
use crate::core::series::Interval;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct PageSession {
    pub category: IndexCategory,
    selected_asset: &'static str,
    pub interval: Interval,
    pub last_refresh: DateTime<Utc>,
    quotes: HashMap<&'static str, Quote>,
    details: HashMap<&'static str, Vec<String>>,
}

impl PageSession {
    /// Starts a session on the category's first asset. Quotes read as zero
    /// until the first refresh.
    pub fn new(category: IndexCategory, now: DateTime<Utc>) -> Self {
        let catalog = category.catalog();
        let quotes = catalog.names().map(|name| (name, Quote::zero())).collect();
        Self {
            category,
            selected_asset: catalog.first().map_or("", |e| e.name),
            interval: Interval::default(),
            last_refresh: now,
            quotes,
            details: HashMap::new(),
        }
    }

    pub fn selected_asset(&self) -> &'static str {
        self.selected_asset
    }

    /// Selects an asset by display name. Names outside the category's catalog
    /// are rejected and the current selection is kept.
    pub fn select_asset(&mut self, name: &str) -> Result<(), DashboardError> {
        let entry = self.category.catalog().lookup(name)?;
        self.selected_asset = entry.name;
        Ok(())
    }

    pub fn needs_refresh(&self, now: DateTime<Utc>, period: TimeDelta) -> bool {
        now.signed_duration_since(self.last_refresh) >= period
    }

    pub fn mark_refreshed(&mut self, now: DateTime<Utc>) {
        self.last_refresh = now;
    }

    pub fn quote(&self, name: &str) -> Quote {
        self.quotes.get(name).copied().unwrap_or_default()
    }

    pub fn details(&self, name: &str) -> &[String] {
        self.details.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Stores a fetch result for `name`. A failed fetch keeps the previously
    /// held quote and returns the message to show instead.
    pub fn apply_fetch(
        &mut self,
        name: &'static str,
        result: Result<QuotePage, ScrapeError>,
    ) -> Option<String> {
        match result {
            Ok(page) => {
                debug!(asset = name, quote = ?page.quote, "Quote updated");
                self.quotes.insert(name, page.quote);
                self.details.insert(name, page.details);
                None
            }
            Err(e) => {
                warn!(asset = name, error = %e, "Keeping previous quote");
                Some(format!("{name}: {e}"))
            }
        }
    }
}
