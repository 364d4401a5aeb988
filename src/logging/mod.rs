//! Stage-transition activity logging to disk.
//!
//! When enabled, appends every committed stage change to daily log files
//! named `activity_<date>.log` in the configured log directory
//! (default: `~/.local/share/leadflow/activity/`).

use crate::board::{Lead, StageChange};
use crate::config::model::ActivityConfig;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Writes committed stage transitions to daily log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a log file cannot be created.
pub struct ActivityLogger {
    enabled: bool,
    log_dir: String,
    file_handles: HashMap<String, fs::File>,
}

impl ActivityLogger {
    pub fn new(config: &ActivityConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            file_handles: HashMap::new(),
        }
    }

    /// Append one committed stage change. No-op when logging is disabled.
    pub fn log_change(&mut self, lead: &Lead, change: &StageChange) {
        if !self.enabled {
            return;
        }

        let now = chrono::Local::now();
        let line = format!(
            "[{}] {} ({}) moved {} -> {}",
            now.format("%H:%M:%S"),
            lead.name,
            lead.company,
            change.from.name(),
            change.to.name(),
        );

        let date = now.format("%Y-%m-%d").to_string();
        let filename = format!("activity_{}.log", date);

        // Expand ~ in log_dir
        let log_dir = if self.log_dir.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                home.join(&self.log_dir[2..])
            } else {
                PathBuf::from(&self.log_dir)
            }
        } else {
            PathBuf::from(&self.log_dir)
        };

        let filepath = log_dir.join(&filename);

        // Get or create file handle
        let handle = self.file_handles.entry(filename.clone()).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a handle that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}
