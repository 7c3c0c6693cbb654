//! Production filesystem adapter

use std::io;
use std::path::{Path, PathBuf};

use crate::logging;
use crate::ports::FileSystem;

/// Filesystem access backed by `std::fs` and shell-style globbing
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_writable(&self, path: &Path) -> bool {
        // Probing with a real (self-deleting) temporary file is more honest
        // than inspecting permission bits, which ignore ACLs and read-only
        // mounts.
        tempfile::tempfile_in(path).is_ok()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_files(&self, pattern: &str) -> io::Result<Vec<PathBuf>> {
        let paths = glob::glob(pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        // Unreadable entries are skipped, as glob() does elsewhere
        Ok(paths.filter_map(Result::ok).collect())
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }

    fn append_line(&self, path: &Path, line: &str) -> io::Result<()> {
        logging::append_line(path, line)
    }
}
