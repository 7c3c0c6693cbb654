use std::path::PathBuf;
use std::process;

use ftpsync::ports::{Console, FtpClient, LocalFileSystem};
use ftpsync::sync::{RunOptions, SyncRunner};

fn main() {
    let (dry_run, web, config_file) = ftpsync::cli::parse_args();

    let fs = LocalFileSystem;
    let mut ftp = FtpClient::new();
    let mut out = Console::new();

    let options = RunOptions { dry_run, web };
    let mut runner = SyncRunner::new(
        &fs,
        &mut ftp,
        &mut out,
        PathBuf::from(config_file),
        options,
    );

    // A fatal precondition failure halts the run; the copy loop itself
    // absorbs per-file failures and never reaches this branch
    if let Err(e) = runner.run() {
        eprintln!("Fatal error: {}", e);
        process::exit(1);
    }
}
