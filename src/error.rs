//! Fatal error taxonomy for a sync run
//!
//! Every variant halts the pipeline; `main` translates the error into a
//! `Fatal error: ...` message and a non-zero exit code. Per-file transfer
//! failures are deliberately not represented here: the copy loop absorbs
//! them and leaves the file for a future run.

use crate::ports::FtpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// FTP support is missing from the environment
    #[error("Cannot find FTP support")]
    FtpUnavailable,

    /// The config file does not exist
    #[error("Cannot find config file `{0}`")]
    ConfigMissing(String),

    /// The config file exists but cannot be used
    #[error("Invalid config: {0}")]
    ConfigInvalid(String),

    /// The local sync target directory does not exist
    #[error("The local sync folder cannot be found: `{0}`")]
    LocalDirMissing(String),

    /// The local sync target directory is not writable
    #[error("Cannot write to the local sync folder: `{0}`")]
    LocalDirNotWritable(String),

    #[error("Could not connect to FTP server: {0}")]
    Connect(FtpError),

    #[error("Could not authenticate to FTP server: {0}")]
    Login(FtpError),

    #[error("Could not switch to passive mode: {0}")]
    Passive(FtpError),

    #[error("Could not change remote directory: {0}")]
    ChangeRemoteDir(FtpError),

    #[error("Could not list remote directory: {0}")]
    RemoteListing(FtpError),

    /// Local filesystem failure while indexing
    #[error("Local file error: {0}")]
    Io(#[from] std::io::Error),
}
