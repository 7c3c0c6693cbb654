//! Command line handling

use std::env;
use std::process;

/// Prints usage instructions for the program.
///
/// Uses `PROGRAM_NAME` constant from `crate` for the executable name.
pub fn print_usage() {
    println!(
        "Usage: {} [-h] [-v] [-n] [-w] config_file",
        crate::PROGRAM_NAME
    );
    println!("  -n  dry run: report intended copies without transferring");
    println!("  -w  web mode: append <br> to progress lines");
}

/// Parses command line arguments and returns invocation options
///
/// # Returns
/// A tuple containing:
/// - `bool`: Whether this is a dry run.
/// - `bool`: Whether web presentation mode is enabled.
/// - `String`: Path to the config file.
///
/// # Exits
/// - With usage text on `-h`, version on `-v`
/// - Non-zero when the config file argument is missing or unexpected
///   arguments are given
pub fn parse_args() -> (bool, bool, String) {
    let mut dry_run = false;
    let mut web = false;
    let mut config_file = None;

    let mut args = env::args();
    args.next(); // Skip program name

    for arg in args {
        match arg.as_str() {
            "-h" => {
                print_usage();
                process::exit(0);
            }
            "-v" => {
                println!("{} version {}", crate::PROGRAM_NAME, crate::PROGRAM_VERSION);
                process::exit(0);
            }
            "-n" => dry_run = true,
            "-w" => web = true,
            _ => {
                if config_file.is_none() {
                    config_file = Some(arg);
                } else {
                    eprintln!("Unexpected argument: {}", arg);
                    print_usage();
                    process::exit(1);
                }
            }
        }
    }

    let config_file = config_file.unwrap_or_else(|| {
        eprintln!("Missing config file argument");
        print_usage();
        process::exit(1);
    });

    (dry_run, web, config_file)
}
