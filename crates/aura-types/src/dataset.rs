use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{config::UploadConfig, ConsoleError, Result};

/// The active uploaded dataset, used to enrich subsequent queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetContext {
    pub dataset_id: String,
    pub filename: String,
    /// (row_count, column_count)
    pub shape: (u64, u64),
    pub columns: Vec<String>,
    /// First rows as returned by the ingest endpoint
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub preview: Vec<Value>,
}

impl DatasetContext {
    pub fn row_count(&self) -> u64 {
        self.shape.0
    }

    pub fn column_count(&self) -> u64 {
        self.shape.1
    }

    /// One-line ingestion summary shown in the timeline
    pub fn summary(&self) -> String {
        format!(
            "Dataset '{}' loaded: {} rows, {} columns.",
            self.filename,
            self.row_count(),
            self.column_count()
        )
    }
}

/// A file the user picked for upload
#[derive(Debug, Clone)]
pub struct DatasetUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DatasetUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn extension(&self) -> Option<String> {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    /// Reject files the ingest endpoint cannot parse before sending them.
    pub fn validate(&self, limits: &UploadConfig) -> Result<()> {
        let ext = self.extension().unwrap_or_default();
        if !limits.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(&ext)) {
            return Err(ConsoleError::UnsupportedFormat(self.filename.clone()));
        }
        let size = self.bytes.len() as u64;
        if size > limits.max_bytes {
            return Err(ConsoleError::PayloadTooLarge {
                size,
                limit: limits.max_bytes,
            });
        }
        Ok(())
    }
}
