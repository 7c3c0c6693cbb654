//! Sync run configuration
//!
//! The config is a single JSON object read once per run. Required keys are
//! the connection credentials and the two directories; everything else has
//! a default. The remote filter is validated as a regex at parse time so
//! the indexer can rely on it compiling later.

use regex::Regex;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::SyncError;

/// FTP synchronization configuration parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SyncConfig {
    /// FTP server hostname or IP address
    pub hostname: String,
    /// Username for the FTP server
    pub username: String,
    /// Password for the FTP server
    pub password: String,
    /// Directory on the FTP server to copy from
    pub remote_directory: String,
    /// Directory on this machine to copy into
    pub local_directory: String,
    /// FTP control port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Whether to switch the session to passive mode
    #[serde(default = "default_pasv")]
    pub pasv: bool,
    /// Shell-glob filter applied to the local listing
    #[serde(default = "default_local_file_filter")]
    pub local_file_filter: String,
    /// Regex filter applied to remote names; empty string disables filtering.
    ///
    /// Note the asymmetry with `local_file_filter` (glob vs regex): matching
    /// behaviour on both sides needs `*` locally and `` remotely.
    #[serde(default = "default_remote_file_filter")]
    pub remote_file_filter: String,
    /// Maximum number of files copied in one run; the rest wait for the next
    #[serde(default = "default_file_copies_per_run")]
    pub file_copies_per_run: usize,
    /// Optional file that diagnostic messages are appended to
    #[serde(default)]
    pub log_path: Option<String>,
}

fn default_port() -> u16 {
    21
}

fn default_timeout() -> u64 {
    20
}

fn default_pasv() -> bool {
    true
}

fn default_local_file_filter() -> String {
    "*.log".to_string()
}

fn default_remote_file_filter() -> String {
    r"\.log$".to_string()
}

fn default_file_copies_per_run() -> usize {
    10
}

/// Parses the configuration file into a `SyncConfig`
///
/// # Errors
/// - `ConfigMissing` if the file does not exist
/// - `ConfigInvalid` on malformed JSON, a missing required key, an invalid
///   remote filter regex, or a zero copy cap
pub fn parse_config(filename: &Path) -> Result<SyncConfig, SyncError> {
    let file = File::open(filename).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            SyncError::ConfigMissing(filename.display().to_string())
        } else {
            SyncError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);

    let config: SyncConfig =
        serde_json::from_reader(reader).map_err(|e| SyncError::ConfigInvalid(e.to_string()))?;

    // Validate the remote filter pattern; an empty filter means "keep all"
    if !config.remote_file_filter.is_empty() {
        Regex::new(&config.remote_file_filter).map_err(|e| {
            SyncError::ConfigInvalid(format!("invalid remote_file_filter regex: {}", e))
        })?;
    }

    if config.file_copies_per_run == 0 {
        return Err(SyncError::ConfigInvalid(
            "file_copies_per_run must be a positive number".to_string(),
        ));
    }

    Ok(config)
}
