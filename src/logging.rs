//! File-backed `log` sink.
//!
//! Every record is appended to a debug log next to the executable (or to
//! the path set in `[log] file`). The file is opened per record so nothing
//! is lost if the process exits abruptly.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{LevelFilter, Log, Metadata, Record};

/// Default log location: `ncode_draw.log` beside the running binary.
pub fn log_path() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_default()
        .parent()
        .unwrap_or(Path::new("."))
        .join("ncode_draw.log")
}

/// Format one record as a single log line.
fn format_record(record: &Record<'_>) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

/// Appends formatted records to a file.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
}

impl FileLogger {
    pub fn new(path: PathBuf, level: LevelFilter) -> Self {
        Self { path, level }
    }

    fn append(&self, line: &str) {
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| {
                f.write_all(line.as_bytes())?;
                f.write_all(b"\n")
            });
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.append(&format_record(record));
        }
    }

    fn flush(&self) {}
}

/// Install a [`FileLogger`] as the global logger.
///
/// `path` of `None` uses [`log_path`]. Does nothing for `LevelFilter::Off`.
/// Fails if a logger is already installed.
pub fn init(level: LevelFilter, path: Option<&Path>) -> Result<(), log::SetLoggerError> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let path = path.map_or_else(log_path, Path::to_path_buf);
    log::set_boxed_logger(Box::new(FileLogger::new(path, level)))?;
    log::set_max_level(level);
    Ok(())
}
