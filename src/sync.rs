//! The run pipeline
//!
//! `SyncRunner` sequences one synchronization run as a strict linear
//! pipeline: environment check, config load, local target validation,
//! connection and login, transfer options, the two indexes, the diff, the
//! remote directory change, the bounded copy loop, and finally a
//! best-effort session close. The first failing stage halts the run; there
//! is no partial recovery and nothing already copied is rolled back.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{parse_config, SyncConfig};
use crate::copy::copy_files;
use crate::diff::index_differencer;
use crate::error::SyncError;
use crate::index::{build_local_index, build_remote_index};
use crate::ports::{FileSystem, Ftp, Output};

/// Per-invocation flags, distinct from the config file
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report intended copies without transferring anything
    pub dry_run: bool,
    /// Decorate progress lines for web presentation (`<br>` suffix)
    pub web: bool,
}

/// Sequences a single synchronization run over the three capability ports
pub struct SyncRunner<'a> {
    fs: &'a dyn FileSystem,
    ftp: &'a mut dyn Ftp,
    out: &'a mut dyn Output,
    config_path: PathBuf,
    options: RunOptions,
}

impl<'a> SyncRunner<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        ftp: &'a mut dyn Ftp,
        out: &'a mut dyn Output,
        config_path: PathBuf,
        options: RunOptions,
    ) -> Self {
        SyncRunner {
            fs,
            ftp,
            out,
            config_path,
            options,
        }
    }

    /// Runs the pipeline to completion or to the first fatal error
    pub fn run(&mut self) -> Result<(), SyncError> {
        // Initial checks, fetch the config
        self.check_environment()?;
        let config = self.load_config()?;

        // Ensure we can write to the sync target directory
        self.validate_local_target(&config)?;

        // Connect to the FTP server
        self.make_connection(&config)?;
        self.set_ftp_options(&config)?;

        // Generate the file indexes on both sides
        let local_index =
            build_local_index(self.fs, &config.local_directory, &config.local_file_filter)?;
        self.informational(
            &config,
            &format!("Found {} items in local directory", local_index.len()),
        );

        let remote_index =
            build_remote_index(self.ftp, &config.remote_directory, &config.remote_file_filter)
                .map_err(SyncError::RemoteListing)?;
        self.informational(
            &config,
            &format!("Found {} items in remote directory", remote_index.len()),
        );

        let file_list = index_differencer(&remote_index, &local_index);

        // Transfers use directory-relative leaf names, so position the
        // session first
        self.ftp
            .cwd(&config.remote_directory)
            .map_err(SyncError::ChangeRemoteDir)?;

        // Now copy a chunk of files
        copy_files(
            self.ftp,
            self.out,
            &self.options,
            &file_list,
            &config.local_directory,
            config.file_copies_per_run,
        );

        // Best-effort teardown, never fatal
        self.ftp.close();

        Ok(())
    }

    fn check_environment(&self) -> Result<(), SyncError> {
        if !self.ftp.is_available() {
            return Err(SyncError::FtpUnavailable);
        }
        Ok(())
    }

    fn load_config(&self) -> Result<SyncConfig, SyncError> {
        if !self.fs.file_exists(&self.config_path) {
            return Err(SyncError::ConfigMissing(
                self.config_path.display().to_string(),
            ));
        }
        parse_config(&self.config_path)
    }

    fn validate_local_target(&self, config: &SyncConfig) -> Result<(), SyncError> {
        let directory = Path::new(&config.local_directory);
        if !self.fs.is_dir(directory) {
            return Err(SyncError::LocalDirMissing(config.local_directory.clone()));
        }
        if !self.fs.is_writable(directory) {
            return Err(SyncError::LocalDirNotWritable(
                config.local_directory.clone(),
            ));
        }
        Ok(())
    }

    fn make_connection(&mut self, config: &SyncConfig) -> Result<(), SyncError> {
        self.ftp
            .connect(
                &config.hostname,
                config.port,
                Duration::from_secs(config.timeout),
            )
            .map_err(SyncError::Connect)?;

        self.ftp
            .login(&config.username, &config.password)
            .map_err(SyncError::Login)?;

        self.informational(
            config,
            &format!("Connected to host `{}`", config.hostname),
        );

        Ok(())
    }

    fn set_ftp_options(&mut self, config: &SyncConfig) -> Result<(), SyncError> {
        // When passive mode is off the switch must not even be attempted
        if !config.pasv {
            return Ok(());
        }

        self.ftp.set_passive(true).map_err(SyncError::Passive)?;

        self.informational(config, "Switched to PASV mode on host");

        Ok(())
    }

    /// Reports progress and useful info when a diagnostic log is configured
    fn informational(&self, config: &SyncConfig, message: &str) {
        if let Some(log_path) = &config.log_path {
            let _ = self.fs.append_line(Path::new(log_path), message);
        }
    }
}
