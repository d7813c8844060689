use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::models::JobRecord;

/// Append-only CSV file holding every scraped batch.
///
/// The header row is written only when the file is first created; later
/// batches are appended below the existing rows untouched.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `batch` and returns the number of rows written.
    pub fn append(&self, batch: &[JobRecord]) -> Result<usize> {
        let file_exists = self.path.is_file();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(!file_exists)
            .from_writer(file);

        for job in batch {
            writer.serialize(job)?;
        }
        writer.flush()?;

        info!("Data saved to {} with {} entries", self.path.display(), batch.len());
        Ok(batch.len())
    }
}
