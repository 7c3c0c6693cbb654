//! Timestamped diagnostic log lines
//!
//! The sync pipeline appends its informational messages to a log file when
//! the config names one. Each line is prefixed with a local timestamp.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Appends `message` to the file at `path`, prefixed with a timestamp.
///
/// The file is created if it does not exist.
pub fn append_line(path: &Path, message: &str) -> io::Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let log_message = format!("{} {}\n", timestamp, message);

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(log_message.as_bytes())?;

    Ok(())
}
