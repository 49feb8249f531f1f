use crate::core::IndexCategory;
use crate::store::csv::{CsvLoader, sanitize_name};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// File name offered for a downloaded series.
pub fn file_name(asset: &str) -> String {
    format!("{}.csv", sanitize_name(asset))
}

/// Copies the asset's data file verbatim to `output`, or to stdout.
pub async fn run(
    loader: &CsvLoader,
    category: IndexCategory,
    asset: &str,
    output: Option<&Path>,
) -> Result<()> {
    let entry = category.catalog().lookup(asset)?;
    let bytes = loader.raw_bytes(entry.csv_name).await?;

    match output {
        Some(path) => {
            let target = if path.is_dir() {
                path.join(file_name(entry.name))
            } else {
                path.to_path_buf()
            };
            tokio::fs::write(&target, &bytes)
                .await
                .with_context(|| format!("Failed to write {}", target.display()))?;
            info!(bytes = bytes.len(), "Downloaded {} to {}", entry.name, target.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .and_then(|_| stdout.flush())
                .context("Failed to write data to stdout")?;
        }
    }
    Ok(())
}
