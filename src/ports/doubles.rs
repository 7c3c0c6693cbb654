//! Test doubles for the capability traits
//!
//! These stand in for the real filesystem, FTP session and console in unit
//! tests. Each double records the calls it receives so tests can assert on
//! call counts and ordering, and each failure can be scripted individually.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ports::{EntryKind, FileSystem, Ftp, FtpError, Output, RemoteEntry};

fn scripted_failure(what: &str) -> FtpError {
    FtpError::ConnectionError(io::Error::new(
        io::ErrorKind::Other,
        format!("scripted {} failure", what),
    ))
}

/// Scriptable FTP session double
pub struct FtpDouble {
    pub available: bool,
    pub listing: Vec<RemoteEntry>,

    pub fail_connect: bool,
    pub fail_login: bool,
    pub fail_passive: bool,
    pub fail_cwd: bool,
    pub fail_list: bool,
    /// Remote names whose fetch should fail
    pub fail_fetches: HashSet<String>,

    pub connect_calls: Vec<(String, u16, Duration)>,
    pub login_calls: Vec<(String, String)>,
    pub passive_calls: Vec<bool>,
    pub cwd_calls: Vec<String>,
    pub list_calls: Vec<String>,
    pub fetch_calls: Vec<(PathBuf, String, bool)>,
    pub close_calls: usize,
}

impl Default for FtpDouble {
    fn default() -> Self {
        FtpDouble {
            available: true,
            listing: Vec::new(),
            fail_connect: false,
            fail_login: false,
            fail_passive: false,
            fail_cwd: false,
            fail_list: false,
            fail_fetches: HashSet::new(),
            connect_calls: Vec::new(),
            login_calls: Vec::new(),
            passive_calls: Vec::new(),
            cwd_calls: Vec::new(),
            list_calls: Vec::new(),
            fetch_calls: Vec::new(),
            close_calls: 0,
        }
    }
}

impl FtpDouble {
    pub fn with_listing(listing: Vec<RemoteEntry>) -> Self {
        FtpDouble {
            listing,
            ..Default::default()
        }
    }
}

impl Ftp for FtpDouble {
    fn is_available(&self) -> bool {
        self.available
    }

    fn connect(&mut self, host: &str, port: u16, timeout: Duration) -> Result<(), FtpError> {
        self.connect_calls.push((host.to_string(), port, timeout));
        if self.fail_connect {
            return Err(scripted_failure("connect"));
        }
        Ok(())
    }

    fn login(&mut self, user: &str, password: &str) -> Result<(), FtpError> {
        self.login_calls.push((user.to_string(), password.to_string()));
        if self.fail_login {
            return Err(scripted_failure("login"));
        }
        Ok(())
    }

    fn set_passive(&mut self, enabled: bool) -> Result<(), FtpError> {
        self.passive_calls.push(enabled);
        if self.fail_passive {
            return Err(scripted_failure("pasv"));
        }
        Ok(())
    }

    fn cwd(&mut self, path: &str) -> Result<(), FtpError> {
        self.cwd_calls.push(path.to_string());
        if self.fail_cwd {
            return Err(scripted_failure("cwd"));
        }
        Ok(())
    }

    fn list(&mut self, path: &str) -> Result<Vec<RemoteEntry>, FtpError> {
        self.list_calls.push(path.to_string());
        if self.fail_list {
            return Err(scripted_failure("list"));
        }
        Ok(self.listing.clone())
    }

    fn fetch(&mut self, local_path: &Path, remote_name: &str, binary: bool) -> Result<(), FtpError> {
        self.fetch_calls
            .push((local_path.to_path_buf(), remote_name.to_string(), binary));
        if self.fail_fetches.contains(remote_name) {
            return Err(scripted_failure("fetch"));
        }
        Ok(())
    }

    fn close(&mut self) {
        self.close_calls += 1;
    }
}

/// In-memory filesystem double.
///
/// `list_files` ignores the glob pattern and returns the scripted file list
/// in order, the way the original mocks returned a canned listing for an
/// expected pattern; the pattern itself is recorded for assertions.
#[derive(Default)]
pub struct FileSystemDouble {
    pub dirs: HashSet<PathBuf>,
    pub writable_dirs: HashSet<PathBuf>,
    pub existing_files: HashSet<PathBuf>,
    /// Paths (with sizes) returned by `list_files`, in order
    pub local_files: Vec<(PathBuf, u64)>,

    pub list_calls: RefCell<Vec<String>>,
    pub appended: RefCell<Vec<(PathBuf, String)>>,
}

impl FileSystemDouble {
    /// A double where `dir` exists and is writable
    pub fn with_dir(dir: &str) -> Self {
        let mut double = FileSystemDouble::default();
        double.dirs.insert(PathBuf::from(dir));
        double.writable_dirs.insert(PathBuf::from(dir));
        double
    }

    pub fn add_local_file(&mut self, path: &str, size: u64) {
        self.local_files.push((PathBuf::from(path), size));
    }

    pub fn appended_lines(&self) -> Vec<(PathBuf, String)> {
        self.appended.borrow().clone()
    }
}

impl FileSystem for FileSystemDouble {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn is_writable(&self, path: &Path) -> bool {
        self.writable_dirs.contains(path)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.existing_files.contains(path)
    }

    fn list_files(&self, pattern: &str) -> io::Result<Vec<PathBuf>> {
        self.list_calls.borrow_mut().push(pattern.to_string());
        Ok(self.local_files.iter().map(|(p, _)| p.clone()).collect())
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        self.local_files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, size)| *size)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such scripted file"))
    }

    fn append_line(&self, path: &Path, line: &str) -> io::Result<()> {
        self.appended
            .borrow_mut()
            .push((path.to_path_buf(), line.to_string()));
        Ok(())
    }
}

/// Output double that captures every emitted line
#[derive(Default)]
pub struct OutputDouble {
    pub lines: Vec<String>,
}

impl Output for OutputDouble {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Builds a listing entry the way a remote MLSD row looks: size as text
pub fn remote_file(name: &str, size: &str) -> RemoteEntry {
    RemoteEntry {
        name: name.to_string(),
        kind: EntryKind::File,
        size: size.to_string(),
    }
}

/// The standard three-file remote listing used across the test suite
pub fn default_remote_listing() -> Vec<RemoteEntry> {
    vec![
        remote_file("log01.log", "100"),
        remote_file("log02.log", "110"),
        remote_file("log03.log", "120"),
    ]
}

/// The standard two-file local listing used across the test suite
pub fn default_local_files() -> Vec<(PathBuf, u64)> {
    vec![
        (PathBuf::from("/local_dir/log01.log"), 100),
        (PathBuf::from("/local_dir/log02.log"), 110),
    ]
}

/// A remote listing of `count` files named log01.log, log02.log, ...
pub fn large_remote_listing(count: usize) -> Vec<RemoteEntry> {
    (0..count)
        .map(|i| remote_file(&format!("log{:02}.log", i + 1), &(100 + i * 10).to_string()))
        .collect()
}
