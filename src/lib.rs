pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::page::PageController;
use crate::core::session::PageSession;
use crate::core::{IndexCategory, Interval};
use crate::providers::google_finance::GoogleFinanceScraper;
use crate::store::csv::CsvLoader;
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, info};

/// Which page to open and how.
#[derive(Debug, Clone)]
pub struct PageArgs {
    pub category: IndexCategory,
    pub asset: Option<String>,
    pub interval: Interval,
}

impl PageArgs {
    fn session(&self) -> Result<PageSession> {
        let mut session = PageSession::new(self.category, Utc::now());
        if let Some(asset) = &self.asset {
            session.select_asset(asset)?;
        }
        session.interval = self.interval;
        Ok(session)
    }
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    Catalog,
    Show(PageArgs),
    Watch {
        page: PageArgs,
        /// Stop after this many refreshed passes; run until Ctrl-C when unset.
        passes: Option<u64>,
    },
    Chart {
        page: PageArgs,
        output: Option<PathBuf>,
    },
    Download {
        category: IndexCategory,
        asset: String,
        output: Option<PathBuf>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("MoneyView starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let loader = CsvLoader::new(config.data_path()?);

    match command {
        AppCommand::Catalog => cli::catalog::run(),
        AppCommand::Chart { page, output } => {
            cli::chart::run(&loader, &page, output.as_deref()).await
        }
        AppCommand::Download {
            category,
            asset,
            output,
        } => cli::download::run(&loader, category, &asset, output.as_deref()).await,
        AppCommand::Show(page) => {
            let scraper = GoogleFinanceScraper::new(config.http_timeout())?;
            let controller = PageController::new(
                &loader,
                &scraper,
                config.quote_base_url(),
                config.refresh_period(),
            );
            cli::page::show(&controller, page.session()?).await
        }
        AppCommand::Watch { page, passes } => {
            let scraper = GoogleFinanceScraper::new(config.http_timeout())?;
            let controller = PageController::new(
                &loader,
                &scraper,
                config.quote_base_url(),
                config.refresh_period(),
            );
            cli::watch::run(&controller, page.session()?, passes).await
        }
    }
}
