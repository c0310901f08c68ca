use crate::constants::LOG_BUFFER_CAPACITY;
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application.
///
/// Keeps the latest lines in memory for the debug overlay. Installed as the
/// `log` backend through [`Logger::install`], optionally alongside a file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    file_enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_enabled: false,
        }
    }

    /// Create a logger honoring the `[logging] enabled` setting
    pub fn from_config(enabled: bool) -> Self {
        Self {
            file_enabled: enabled,
            ..Self::new()
        }
    }

    pub fn is_file_enabled(&self) -> bool {
        self.file_enabled
    }

    /// Route the `log` macros to this logger, and to a file when enabled
    pub fn install(&self, level: log::LevelFilter) -> Result<()> {
        let mut dispatch = fern::Dispatch::new()
            .level(level)
            .chain(Box::new(self.clone()) as Box<dyn log::Log>);

        if self.file_enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{}] {:<5} {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        dispatch.apply().context("A global logger is already installed")?;
        Ok(())
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == LOG_BUFFER_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Location of the log file written when file logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("actionbar").join("actionbar.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        Logger::log(self, format!("{:<5} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}
