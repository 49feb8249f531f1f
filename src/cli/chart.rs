use crate::PageArgs;
use crate::core::chart::{self, ChartSpec};
use crate::core::resample::resample;
use crate::store::csv::CsvLoader;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Builds the chart of the selected asset without touching the network.
pub async fn build(loader: &CsvLoader, page: &PageArgs) -> Result<ChartSpec> {
    let catalog = page.category.catalog();
    let entry = match &page.asset {
        Some(name) => catalog.lookup(name)?,
        None => catalog
            .first()
            .with_context(|| format!("The {} catalog is empty", page.category))?,
    };

    let rows = loader.load(entry.csv_name).await?;
    let series = resample(&rows, page.interval);
    Ok(chart::render(
        &series.period_starts,
        &series.mean_closes,
        entry.name,
        &page.interval.to_string(),
    ))
}

/// Writes the chart as a plotly figure in JSON, to `output` or stdout.
pub async fn run(loader: &CsvLoader, page: &PageArgs, output: Option<&Path>) -> Result<()> {
    let chart = build(loader, page).await?;
    let json = serde_json::to_string_pretty(&chart).context("Failed to serialize chart")?;

    match output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write chart to {}", path.display()))?;
            info!("Wrote chart to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write chart to stdout")?;
        }
    }
    Ok(())
}
