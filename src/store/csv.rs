//! Historical price files: one `<name>.csv` per asset under the data directory.

use crate::core::cache::Cache;
use crate::core::error::{DashboardError, Result};
use crate::core::series::{TimeSeriesRow, parse_row_date};
use crate::store::memory::MemoryCache;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info};

/// Identity of a file version on disk. A cached series is served only while
/// the file still carries the stamp it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl From<&std::fs::Metadata> for FileStamp {
    fn from(meta: &std::fs::Metadata) -> Self {
        Self {
            modified: meta.modified().ok(),
            len: meta.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CachedSeries {
    stamp: FileStamp,
    rows: Arc<Vec<TimeSeriesRow>>,
}

pub struct CsvLoader {
    data_dir: PathBuf,
    cache: Arc<dyn Cache<String, CachedSeries>>,
}

/// Replaces path separators so a display name like `USD/INR` maps to a single file.
pub fn sanitize_name(name: &str) -> String {
    name.replace(['/', '\\'], " ")
}

/// The last `n` rows of a series, oldest first.
pub fn tail(rows: &[TimeSeriesRow], n: usize) -> &[TimeSeriesRow] {
    &rows[rows.len().saturating_sub(n)..]
}

impl CsvLoader {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::with_cache(data_dir, Arc::new(MemoryCache::<String, CachedSeries>::new()))
    }

    pub fn with_cache<P: AsRef<Path>>(
        data_dir: P,
        cache: Arc<dyn Cache<String, CachedSeries>>,
    ) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            cache,
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", sanitize_name(name)))
    }

    /// Loads the series for `name`, re-reading the file only when it changed
    /// since the cached copy was parsed.
    pub async fn load(&self, name: &str) -> Result<Arc<Vec<TimeSeriesRow>>> {
        let path = self.path_for(name);
        let key = name.to_string();

        let stamp = match tokio::fs::metadata(&path).await {
            Ok(meta) => FileStamp::from(&meta),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.cache.remove(&key).await;
                return Err(DashboardError::NotFound { path });
            }
            Err(e) => return Err(io_error(&path, e)),
        };

        if let Some(cached) = self.cache.get(&key).await {
            if cached.stamp == stamp {
                return Ok(cached.rows);
            }
            debug!("Data file changed on disk: {}", path.display());
        }

        let bytes = self.read(&path).await?;
        let rows = Arc::new(parse_rows(&bytes, &path)?);
        info!(rows = rows.len(), "Loaded {}", path.display());

        self.cache
            .put(
                key,
                CachedSeries {
                    stamp,
                    rows: Arc::clone(&rows),
                },
            )
            .await;
        Ok(rows)
    }

    /// The file contents exactly as stored on disk.
    pub async fn raw_bytes(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name);
        self.read(&path).await
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                DashboardError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                io_error(path, e)
            }
        })
    }
}

fn io_error(path: &Path, e: std::io::Error) -> DashboardError {
    DashboardError::Load {
        path: path.to_path_buf(),
        row: 0,
        reason: e.to_string(),
    }
}

/// Reads a plain decimal amount. `NaN` and infinities are rejected.
fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', "")
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
}

/// Parses `Date`, `Close` and optional `Volume` columns. Row numbers in errors
/// count data rows from 1; row 0 is the header.
fn parse_rows(bytes: &[u8], path: &Path) -> Result<Vec<TimeSeriesRow>> {
    let load_error = |row: usize, reason: String| DashboardError::Load {
        path: path.to_path_buf(),
        row,
        reason,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| load_error(0, e.to_string()))?
        .clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let date_col = column("Date").ok_or_else(|| load_error(0, "missing Date column".into()))?;
    let close_col = column("Close").ok_or_else(|| load_error(0, "missing Close column".into()))?;
    let volume_col = column("Volume");

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|e| load_error(row, e.to_string()))?;

        let date_text = record.get(date_col).unwrap_or_default();
        let date = parse_row_date(date_text)
            .ok_or_else(|| load_error(row, format!("invalid date '{date_text}'")))?;

        let close_text = record.get(close_col).unwrap_or_default();
        let close = parse_number(close_text)
            .ok_or_else(|| load_error(row, format!("invalid close '{close_text}'")))?;

        // Unreadable volumes count as zero rather than failing the file.
        let volume = volume_col.map(|col| {
            record
                .get(col)
                .and_then(parse_number)
                .map_or(0, |v| v.max(0.0) as u64)
        });

        rows.push(TimeSeriesRow {
            date,
            close,
            volume,
        });
    }

    Ok(rows)
}
