//! Output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTPUT_DIR;

/// Where and how build artifacts are written.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Artifact directory. Default: `data`.
    pub dir: Option<String>,
    /// Pretty-print JSON artifacts. Default: false.
    pub pretty: Option<bool>,
}

impl OutputConfig {
    pub fn effective_dir(&self) -> PathBuf {
        PathBuf::from(self.dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }

    pub fn effective_pretty(&self) -> bool {
        self.pretty.unwrap_or(false)
    }
}
