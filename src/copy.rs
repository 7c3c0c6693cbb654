//! The bounded, ordered copy loop

use std::path::Path;

use crate::ports::{Ftp, Output};
use crate::sync::RunOptions;

/// Copies up to `copy_limit` files from the difference list, in order.
///
/// Files beyond the cap are deferred to a future run, not lost: they will
/// show up in the next diff as long as they remain missing or mismatched.
/// Copies are strictly sequential; the single FTP session cannot carry
/// concurrent transfers.
pub fn copy_files(
    ftp: &mut dyn Ftp,
    out: &mut dyn Output,
    options: &RunOptions,
    file_list: &[String],
    local_directory: &str,
    copy_limit: usize,
) {
    for file in file_list.iter().take(copy_limit) {
        copy_file(ftp, out, options, local_directory, file);
    }
}

/// The differencer relies on binary mode. Timestamps could be used instead
/// in the unlikely event of needing to cater for Windows servers, where
/// binary mode might not work so well (due to differences in line end
/// encodings).
fn copy_file(
    ftp: &mut dyn Ftp,
    out: &mut dyn Output,
    options: &RunOptions,
    local_directory: &str,
    file: &str,
) {
    if options.dry_run {
        emit(out, options, &format!("Would copy {} (dry run)", file));
        return;
    }

    let local_path = Path::new(local_directory).join(file);
    // A failed fetch is silently skipped: the local copy is still absent or
    // mismatched, so the file reappears in the next run's diff
    if ftp.fetch(&local_path, file, true).is_ok() {
        emit(out, options, &format!("Copy {} OK", file));
    }
}

fn emit(out: &mut dyn Output, options: &RunOptions, message: &str) {
    if options.web {
        out.write_line(&format!("{}<br>", message));
    } else {
        out.write_line(message);
    }
}
