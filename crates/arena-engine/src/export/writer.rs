//! Scoped JSON file writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use arena_core::errors::{ExportError, ExportResult};
use arena_core::ArenaErrorCode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub bytes: u64,
    pub exported_at: DateTime<Utc>,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Serialize `value` to `path`, creating parent directories. The file
/// handle is dropped on every return path.
pub fn write_json<T>(path: &Path, value: &T, pretty: bool) -> ExportResult<ExportSummary>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(path))?;
    }

    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writer.flush().map_err(io_error(path))?;
    drop(writer);

    let bytes = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    info!(path = %path.display(), bytes, "Export written");

    Ok(ExportSummary {
        path: path.to_path_buf(),
        bytes,
        exported_at: Utc::now(),
    })
}

/// `write_json`, with failure downgraded to a logged warning string.
pub fn try_export<T>(what: &str, path: &Path, value: &T, pretty: bool) -> Option<String>
where
    T: Serialize + ?Sized,
{
    match write_json(path, value, pretty) {
        Ok(_) => None,
        Err(e) => {
            warn!(
                what,
                path = %path.display(),
                code = e.error_code(),
                error = %e,
                "Export failed; in-memory state kept"
            );
            Some(format!("{what} export failed: {e}"))
        }
    }
}
