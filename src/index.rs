//! File indexes: the unit of comparison between local and remote state
//!
//! An index maps a file's leaf name to its size in bytes. Enumeration order
//! matters on the remote side (the copy list follows it), so the index is
//! backed by a vector of pairs rather than a sorted map.

use std::io;

use regex::Regex;

use crate::ports::{EntryKind, FileSystem, Ftp, FtpError};

/// Insertion-ordered mapping from leaf file name to size in bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndex {
    entries: Vec<(String, u64)>,
}

impl FileIndex {
    pub fn new() -> Self {
        FileIndex::default()
    }

    pub fn insert(&mut self, name: String, size: u64) {
        self.entries.push((name, size));
    }

    /// Looks a name up; listings do not repeat names, so a linear scan is fine
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, size)| *size)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }
}

/// Builds the index of the local target directory.
///
/// `filter` is a shell-glob pattern (e.g. `*.log`) resolved relative to
/// `directory`. No recursion into subdirectories. The caller has already
/// checked that the directory exists and is writable.
pub fn build_local_index(
    fs: &dyn FileSystem,
    directory: &str,
    filter: &str,
) -> io::Result<FileIndex> {
    let pattern = format!("{}/{}", directory.trim_end_matches('/'), filter);
    let file_list = fs.list_files(&pattern)?;

    let mut index = FileIndex::new();
    for file in file_list {
        let name = match file.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let size = fs.file_size(&file)?;
        index.insert(name, size);
    }

    Ok(index)
}

/// Builds the index of the remote directory.
///
/// Listing entries that are not regular files are dropped. When `filter` is
/// non-empty it is applied as a regex over entry names and non-matches are
/// dropped; an empty filter keeps every file. Sizes arrive as text and are
/// parsed here, degrading to 0 when unparsable.
pub fn build_remote_index(
    ftp: &mut dyn Ftp,
    directory: &str,
    filter: &str,
) -> Result<FileIndex, FtpError> {
    let file_list = ftp.list(directory)?;

    let regex = if filter.is_empty() {
        None
    } else {
        // The pattern was validated when the config was parsed
        Some(Regex::new(filter).expect("remote filter regex should be valid"))
    };

    let mut index = FileIndex::new();
    for entry in file_list {
        if entry.kind != EntryKind::File {
            continue;
        }

        if let Some(regex) = &regex {
            if !regex.is_match(&entry.name) {
                continue;
            }
        }

        let size = entry.size.parse::<u64>().unwrap_or(0);
        index.insert(entry.name, size);
    }

    Ok(index)
}
