use serde::{Deserialize, Serialize};

use crate::{ConsoleError, Result};

/// Top-level console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the orchestrator API, including its version prefix
    pub api_base: String,
    pub user_id: String,
    pub pacing: PacingConfig,
    pub upload: UploadConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            pacing: PacingConfig::default(),
            upload: UploadConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Parse a partial JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base.trim().is_empty() {
            return Err(ConsoleError::Config("api_base must not be empty".to_string()));
        }
        if self.user_id.trim().is_empty() {
            return Err(ConsoleError::Config("user_id must not be empty".to_string()));
        }
        if self.upload.max_bytes == 0 {
            return Err(ConsoleError::Config("upload.max_bytes must be positive".to_string()));
        }
        Ok(())
    }

    /// `api_base` joined with `path`, without doubled slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Visual pacing of the staged reveal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Pause while an agent is shown as processing
    pub work_ms: u64,
    /// Pause after an agent's result is revealed
    pub settle_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            work_ms: 1200,
            settle_ms: 600,
        }
    }
}

impl PacingConfig {
    /// No pauses at all
    pub fn instant() -> Self {
        Self {
            work_ms: 0,
            settle_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_bytes: u64,
    /// Lowercase, without the leading dot
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: 50 * 1024 * 1024,
            allowed_extensions: ["csv", "xlsx", "xls", "json"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";
const DEFAULT_USER_ID: &str = "demo_user";
