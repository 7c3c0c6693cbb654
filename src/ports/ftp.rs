//! Production FTP adapter built on `suppaftp::FtpStream`

use std::io;
use std::net::ToSocketAddrs;
use std::path::Path;
use std::time::Duration;

use suppaftp::types::FileType;
use suppaftp::{FtpStream, Mode};

use crate::ports::{EntryKind, Ftp, FtpError, RemoteEntry};

/// FTP client for plain (unencrypted) FTP connections.
///
/// The stream is absent until `connect` succeeds, mirroring how the classic
/// FTP API stores the handle after `ftp_connect`.
#[derive(Default)]
pub struct FtpClient {
    stream: Option<FtpStream>,
}

impl FtpClient {
    pub fn new() -> Self {
        FtpClient { stream: None }
    }

    fn stream(&mut self) -> Result<&mut FtpStream, FtpError> {
        self.stream.as_mut().ok_or_else(|| {
            FtpError::ConnectionError(io::Error::new(
                io::ErrorKind::NotConnected,
                "FTP session is not connected",
            ))
        })
    }
}

impl Ftp for FtpClient {
    fn is_available(&self) -> bool {
        // FTP support is compiled into the binary
        true
    }

    fn connect(&mut self, host: &str, port: u16, timeout: Duration) -> Result<(), FtpError> {
        // Resolve host to all possible addresses
        let addrs: Vec<std::net::SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(FtpError::ConnectionError)?
            .collect();

        if addrs.is_empty() {
            return Err(FtpError::ConnectionError(io::Error::new(
                io::ErrorKind::NotFound,
                "No addresses found",
            )));
        }

        // Try each address until one succeeds
        let mut last_error = None;
        for addr in addrs {
            match FtpStream::connect_timeout(addr, timeout) {
                Ok(stream) => {
                    self.stream = Some(stream);
                    return Ok(());
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            FtpError::ConnectionError(io::Error::new(
                io::ErrorKind::NotFound,
                "No addresses available",
            ))
        }))
    }

    fn login(&mut self, user: &str, password: &str) -> Result<(), FtpError> {
        self.stream()?.login(user, password)
    }

    fn set_passive(&mut self, enabled: bool) -> Result<(), FtpError> {
        let mode = if enabled { Mode::Passive } else { Mode::Active };
        self.stream()?.set_mode(mode);
        Ok(())
    }

    fn cwd(&mut self, path: &str) -> Result<(), FtpError> {
        self.stream()?.cwd(path)
    }

    fn list(&mut self, path: &str) -> Result<Vec<RemoteEntry>, FtpError> {
        let lines = self.stream()?.list(Some(path))?;

        // Lines the parser does not understand are dropped rather than
        // failing the whole listing.
        let mut entries = Vec::new();
        for line in &lines {
            if let Ok(file) = suppaftp::list::File::try_from(line.as_str()) {
                let kind = if file.is_file() {
                    EntryKind::File
                } else if file.is_directory() {
                    EntryKind::Directory
                } else {
                    EntryKind::Other
                };
                entries.push(RemoteEntry {
                    name: file.name().to_string(),
                    kind,
                    size: file.size().to_string(),
                });
            }
        }

        Ok(entries)
    }

    fn fetch(&mut self, local_path: &Path, remote_name: &str, binary: bool) -> Result<(), FtpError> {
        let stream = self.stream()?;

        let file_type = if binary {
            FileType::Binary
        } else {
            FileType::Ascii(suppaftp::types::FormatControl::NonPrint)
        };
        stream.transfer_type(file_type)?;

        stream.retr(remote_name, |reader| {
            let mut file = std::fs::File::create(local_path).map_err(FtpError::ConnectionError)?;
            std::io::copy(reader, &mut file).map_err(FtpError::ConnectionError)?;
            Ok(())
        })
    }

    fn close(&mut self) {
        // Fail silently if it did not work
        if let Some(mut stream) = self.stream.take() {
            let _ = stream.quit();
        }
    }
}
