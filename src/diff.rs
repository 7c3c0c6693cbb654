//! Decides which files from the remote need copying

use crate::index::FileIndex;

/// Compares the two indexes and returns the remote names to copy, in remote
/// enumeration order.
///
/// A remote file is selected when it is absent locally or when the local
/// size differs from the remote size (exact integer comparison; there is no
/// timestamp or content check). Files present only locally are never
/// reported — nothing is ever deleted.
pub fn index_differencer(remote_index: &FileIndex, local_index: &FileIndex) -> Vec<String> {
    let mut differences = Vec::new();

    for (name, remote_size) in remote_index.iter() {
        let copy = match local_index.get(name) {
            // Copy if the file sizes are different
            Some(local_size) => local_size != remote_size,
            // Copy if we don't have the file locally at all
            None => true,
        };

        if copy {
            differences.push(name.to_string());
        }
    }

    differences
}
