//! Export configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where the metrics document is written after every round. `None` disables it.
    pub metrics_path: Option<PathBuf>,
    /// Where per-team learning snapshots are written. `None` disables it.
    pub learning_path: Option<PathBuf>,
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            metrics_path: None,
            learning_path: None,
            pretty: true,
        }
    }
}
