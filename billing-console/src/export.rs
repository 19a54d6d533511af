//! CSV export of the filtered order set

use std::path::{Path, PathBuf};
use std::sync::Arc;

use billing_client::ReportingApi;
use chrono::NaiveDate;
use shared::DateRange;
use shared::util::{format_iso_date, today_utc};

use crate::error::ReportResult;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// `orders_2024-01-31.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("orders_{}.csv", format_iso_date(date))
}

/// A fully received CSV export, not yet on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    /// Order ids from the first column, header row skipped
    pub fn order_ids(&self) -> ReportResult<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(self.bytes.as_slice());

        let mut ids = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(id) = record.get(0).filter(|id| !id.is_empty()) {
                ids.push(id.to_string());
            }
        }
        Ok(ids)
    }

    /// Write into `dir` and return the final path.
    ///
    /// The payload goes to a hidden partial file first and is renamed into
    /// place only once fully written.
    pub fn save_to(&self, dir: &Path) -> ReportResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let target = dir.join(&self.file_name);
        let partial = dir.join(format!(".{}.part", self.file_name));

        if let Err(e) = std::fs::write(&partial, &self.bytes) {
            let _ = std::fs::remove_file(&partial);
            return Err(e.into());
        }
        if let Err(e) = std::fs::rename(&partial, &target) {
            let _ = std::fs::remove_file(&partial);
            return Err(e.into());
        }
        Ok(target)
    }
}

/// Requests the backend's CSV rendering and delivers it as a file
#[derive(Clone)]
pub struct ExportPipeline {
    api: Arc<dyn ReportingApi>,
}

impl ExportPipeline {
    pub fn new(api: Arc<dyn ReportingApi>) -> Self {
        Self { api }
    }

    /// Download the CSV for `range`, named after `today`.
    pub async fn fetch(
        &self,
        range: Option<DateRange>,
        today: NaiveDate,
    ) -> ReportResult<ExportedFile> {
        let bytes = self
            .api
            .download_orders(range.as_ref())
            .await
            .inspect_err(|e| tracing::error!(?range, error = %e, "Export download failed"))?;

        let file = ExportedFile {
            file_name: export_file_name(today),
            content_type: CSV_CONTENT_TYPE,
            bytes,
        };
        tracing::info!(
            ?range,
            file = %file.file_name,
            size = file.bytes.len(),
            "Export downloaded"
        );
        Ok(file)
    }

    /// Download and save under `dir`; nothing is written on failure.
    pub async fn export_csv(&self, range: Option<DateRange>, dir: &Path) -> ReportResult<PathBuf> {
        let file = self.fetch(range, today_utc()).await?;
        let path = file
            .save_to(dir)
            .inspect_err(|e| tracing::error!(dir = %dir.display(), error = %e, "Export write failed"))?;
        tracing::info!(path = %path.display(), "Export saved");
        Ok(path)
    }
}
