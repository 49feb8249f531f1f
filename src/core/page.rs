//! One render pass of a category page: refresh quotes when due, then build
//! the chart, metrics strip and info panel for the selected asset.

use crate::core::catalog::{AssetEntry, IndexCategory};
use crate::core::chart::{self, ChartSpec};
use crate::core::quote::{Quote, QuoteProvider};
use crate::core::resample::resample;
use crate::core::series::{Interval, TimeSeriesRow};
use crate::core::session::PageSession;
use crate::store::csv::{CsvLoader, tail};
use chrono::{DateTime, TimeDelta, Utc};
use futures::future::join_all;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    None,
    Refresh,
    SelectAsset(String),
    SetInterval(Interval),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricView {
    pub name: &'static str,
    pub prefix: &'static str,
    pub quote: Quote,
}

/// Descriptive panel of the selected asset. Values missing from the last
/// fetched quote page are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoPanel {
    pub about: &'static str,
    pub details: Vec<(&'static str, Option<String>)>,
    pub company_facts: Vec<(&'static str, Option<String>)>,
}

#[derive(Debug, Clone)]
pub struct PageView {
    pub category: IndexCategory,
    pub asset: &'static str,
    pub interval: Interval,
    pub refreshed: bool,
    pub metrics: Vec<MetricView>,
    pub chart: Option<ChartSpec>,
    pub info: InfoPanel,
    pub recent_rows: Option<Vec<TimeSeriesRow>>,
    /// Inline error messages; a failing component never aborts the pass.
    pub messages: Vec<String>,
}

pub struct PageController<'a> {
    loader: &'a CsvLoader,
    quotes: &'a dyn QuoteProvider,
    base_url: &'a str,
    refresh_period: TimeDelta,
}

impl<'a> PageController<'a> {
    pub fn new(
        loader: &'a CsvLoader,
        quotes: &'a dyn QuoteProvider,
        base_url: &'a str,
        refresh_period: std::time::Duration,
    ) -> Self {
        Self {
            loader,
            quotes,
            base_url,
            refresh_period: TimeDelta::from_std(refresh_period).unwrap_or(TimeDelta::MAX),
        }
    }

    pub async fn render(
        &self,
        session: &mut PageSession,
        action: PageAction,
        now: DateTime<Utc>,
    ) -> PageView {
        let mut messages = Vec::new();

        let manual_refresh = match action {
            PageAction::None => false,
            PageAction::Refresh => true,
            PageAction::SelectAsset(name) => {
                if let Err(e) = session.select_asset(&name) {
                    messages.push(e.to_string());
                }
                false
            }
            PageAction::SetInterval(interval) => {
                session.interval = interval;
                false
            }
        };

        let refreshed = manual_refresh || session.needs_refresh(now, self.refresh_period);
        if refreshed {
            self.refresh_quotes(session, &mut messages).await;
            session.mark_refreshed(now);
        }

        let category = session.category;
        let catalog = category.catalog();
        let metrics = catalog
            .entries()
            .iter()
            .map(|entry| MetricView {
                name: entry.name,
                prefix: category.value_prefix(),
                quote: session.quote(entry.name),
            })
            .collect();

        let mut view = PageView {
            category,
            asset: session.selected_asset(),
            interval: session.interval,
            refreshed,
            metrics,
            chart: None,
            info: InfoPanel::default(),
            recent_rows: None,
            messages,
        };

        let entry = match catalog.lookup(session.selected_asset()) {
            Ok(entry) => entry,
            Err(e) => {
                view.messages.push(e.to_string());
                return view;
            }
        };

        view.info = info_panel(category, entry, session.details(entry.name));

        match self.loader.load(entry.csv_name).await {
            Ok(rows) => {
                let series = resample(&rows, session.interval);
                view.chart = Some(chart::render(
                    &series.period_starts,
                    &series.mean_closes,
                    entry.name,
                    &session.interval.to_string(),
                ));
                view.recent_rows = category.recent_rows().map(|n| tail(&rows, n).to_vec());
            }
            Err(e) => view.messages.push(e.to_string()),
        }

        view
    }

    /// Fetches every asset of the session's category concurrently and stores
    /// the results. Failures keep the old quote and add a message.
    async fn refresh_quotes(&self, session: &mut PageSession, messages: &mut Vec<String>) {
        let entries = session.category.catalog().entries();
        info!(
            category = %session.category,
            assets = entries.len(),
            "Refreshing quotes"
        );

        let fetches = entries.iter().map(|entry| async move {
            let url = entry.quote_url(self.base_url);
            (entry.name, self.quotes.fetch(&url).await)
        });

        for (name, result) in join_all(fetches).await {
            if let Some(message) = session.apply_fetch(name, result) {
                messages.push(message);
            }
        }
        debug!("Quote refresh complete");
    }
}

fn info_panel(category: IndexCategory, entry: &AssetEntry, details: &[String]) -> InfoPanel {
    let value_at = |i: usize| details.get(i).cloned();
    InfoPanel {
        about: entry.about,
        details: category
            .detail_labels()
            .iter()
            .enumerate()
            .map(|(i, label)| (*label, value_at(i)))
            .collect(),
        company_facts: category
            .company_fact_labels()
            .iter()
            .map(|(i, label)| (*label, value_at(*i)))
            .collect(),
    }
}
