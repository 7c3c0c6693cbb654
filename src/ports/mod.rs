//! Capability traits consumed by the synchronization engine
//!
//! The engine never touches the filesystem, the network or stdout directly.
//! It talks to these three traits instead, so the whole pipeline can be
//! driven by test doubles without real I/O. Production adapters live in the
//! submodules: `LocalFileSystem`, `FtpClient` and `Console`.

pub mod console;
pub mod fs;
pub mod ftp;

#[cfg(test)]
pub mod doubles;

pub use console::Console;
pub use fs::LocalFileSystem;
pub use ftp::FtpClient;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Error type for FTP port operations
pub type FtpError = suppaftp::FtpError;

/// What a remote directory listing says an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Symlink, device, or anything else the listing reports
    Other,
}

/// One raw row of a remote directory listing.
///
/// The size is kept as text here: FTP listings hand sizes over as strings,
/// and the indexer is the one place that converts them to integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub name: String,
    pub kind: EntryKind,
    pub size: String,
}

/// Local filesystem operations used by the sync pipeline
pub trait FileSystem {
    /// True if `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// True if files can be created inside the directory `path`
    fn is_writable(&self, path: &Path) -> bool;

    /// True if `path` exists (used for the config file check)
    fn file_exists(&self, path: &Path) -> bool;

    /// Lists paths matching a shell-glob pattern, e.g. `/var/log/*.log`
    fn list_files(&self, pattern: &str) -> io::Result<Vec<PathBuf>>;

    /// Size of the file at `path` in bytes
    fn file_size(&self, path: &Path) -> io::Result<u64>;

    /// Appends a timestamped line to the file at `path`
    fn append_line(&self, path: &Path, line: &str) -> io::Result<()>;
}

/// FTP session operations used by the sync pipeline.
///
/// A session is a single mutable resource owned by one run. Methods mirror
/// the classic FTP client calls; `close` is best-effort and infallible from
/// the caller's point of view.
pub trait Ftp {
    /// True if FTP support is present in this environment
    fn is_available(&self) -> bool;

    /// Opens the control connection
    fn connect(&mut self, host: &str, port: u16, timeout: Duration) -> Result<(), FtpError>;

    /// Authenticates the session
    fn login(&mut self, user: &str, password: &str) -> Result<(), FtpError>;

    /// Switches the data connection to passive mode
    fn set_passive(&mut self, enabled: bool) -> Result<(), FtpError>;

    /// Changes the session working directory
    fn cwd(&mut self, path: &str) -> Result<(), FtpError>;

    /// Lists the entries of a remote directory
    fn list(&mut self, path: &str) -> Result<Vec<RemoteEntry>, FtpError>;

    /// Downloads `remote_name` (relative to the session working directory)
    /// into `local_path`
    fn fetch(&mut self, local_path: &Path, remote_name: &str, binary: bool) -> Result<(), FtpError>;

    /// Closes the session, suppressing any error
    fn close(&mut self);
}

/// Sink for human-readable progress messages
pub trait Output {
    fn write_line(&mut self, line: &str);
}
