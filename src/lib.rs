//! One-directional FTP-to-local file synchronization
//!
//! This library contains the core logic for the ftpsync utility: building a
//! file index on each side, computing the difference, and copying a bounded
//! batch of remote files into the local directory. It is meant for setups
//! where SSH/rsync is unavailable and FTP is the only transfer mechanism.
//!
//! The engine works against three capability traits (filesystem, FTP
//! session, progress output) so that the whole pipeline is unit-testable
//! without real I/O; the production adapters live in [`ports`].

// Module declarations
pub mod cli;
pub mod config;
pub mod copy;
pub mod diff;
pub mod error;
pub mod index;
pub mod logging;
pub mod ports;
pub mod sync;

// Re-export key items for easy use by the binary (main.rs)
pub use cli::parse_args;
pub use config::{parse_config, SyncConfig};
pub use copy::copy_files;
pub use diff::index_differencer;
pub use error::SyncError;
pub use index::{build_local_index, build_remote_index, FileIndex};
pub use ports::{Console, FileSystem, Ftp, FtpClient, LocalFileSystem, Output};
pub use sync::{RunOptions, SyncRunner};

/// Name of the program used in usage and version output
pub const PROGRAM_NAME: &str = "ftpsync";

/// Current version of the program (from Cargo.toml)
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");
