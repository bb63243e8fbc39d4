//! # UNIX client
//!
//! UNIX implementation of the Smb share, backed by libsmbclient

// -- exports
use std::io::{self, Read, Write};

pub use pavao::{SmbClient, SmbCredentials, SmbEncryptionLevel, SmbOptions, SmbShareMode};
use pavao::SmbMode;
use remotefs::{RemoteError, RemoteErrorType, RemoteResult};

use crate::share::{FileOpenArgs, RemoteFile, RemoteShare};
use crate::utils::{path as path_utils, smb as smb_utils};

/// Mode of directories created through the share
const DIR_MODE: u32 = 0o755;

/// SMB share on a libsmbclient connection
pub struct SmbShare {
    client: SmbClient,
}

impl SmbShare {
    /// Try to create a new `SmbShare`.
    /// Fails if it is not possible to instantiate a smb context.
    pub fn try_new(credentials: SmbCredentials, options: SmbOptions) -> RemoteResult<Self> {
        Ok(Self {
            client: SmbClient::new(credentials, options)
                .map_err(|e| RemoteError::new_ex(RemoteErrorType::BadAddress, e))?,
        })
    }

    /// Return a reference to the inner `pavao::SmbClient`
    pub fn client(&self) -> &SmbClient {
        &self.client
    }

    /// Return a mutable reference to the inner `pavao::SmbClient`
    pub fn client_mut(&mut self) -> &mut SmbClient {
        &mut self.client
    }

    /// Check whether the share can be reached with the configured credentials
    pub fn connect(&self) -> RemoteResult<()> {
        self.check_connection()
    }

    // -- private

    fn check_connection(&self) -> RemoteResult<()> {
        trace!("checking connection...");
        match self.client.get_user() {
            Err(e) => {
                error!("connection ERROR: {}", e);
                Err(RemoteError::new_ex(RemoteErrorType::ConnectionError, e))
            }
            Ok(_) => {
                trace!("connection OK");
                Ok(())
            }
        }
    }
}

impl RemoteShare for SmbShare {
    fn open_file(
        &mut self,
        path: &str,
        args: &FileOpenArgs,
    ) -> RemoteResult<Box<dyn RemoteFile + '_>> {
        self.check_connection()?;
        let uri = path_utils::to_uri(path);
        trace!("opening file at {} with {:?}", uri, args.disposition);
        let file = self
            .client
            .open_with(uri.as_str(), smb_utils::open_options(args))
            .map_err(|e| {
                error!("could not open {}: {}", uri, e);
                RemoteError::new_ex(smb_utils::error_kind(&e), e)
            })?;
        Ok(Box::new(SmbShareFile {
            file: Box::new(file),
            uri,
        }))
    }

    fn folder_exists(&mut self, path: &str) -> RemoteResult<bool> {
        self.check_connection()?;
        let uri = path_utils::to_uri(path);
        trace!("checking if directory {} exists...", uri);
        match self.client.stat(uri.as_str()) {
            Ok(stat) => Ok(smb_utils::is_dir(&stat)),
            Err(e) if smb_utils::is_not_found(&e) => Ok(false),
            Err(e) => {
                error!("stat of {} failed: {}", uri, e);
                Err(RemoteError::new_ex(RemoteErrorType::StatFailed, e))
            }
        }
    }

    fn mkdir(&mut self, path: &str) -> RemoteResult<()> {
        self.check_connection()?;
        let uri = path_utils::to_uri(path);
        trace!("making directory at {}", uri);
        self.client
            .mkdir(uri.as_str(), SmbMode::from(DIR_MODE as libc::mode_t))
            .map_err(|e| RemoteError::new_ex(smb_utils::error_kind(&e), e))
    }
}

/// An open libsmbclient file. The descriptor is closed when dropped.
struct SmbShareFile<'a> {
    file: Box<dyn Write + 'a>,
    uri: String,
}

impl RemoteFile for SmbShareFile<'_> {
    fn write_from(&mut self, reader: &mut dyn Read) -> RemoteResult<u64> {
        trace!("writing to {}", self.uri);
        io::copy(reader, &mut self.file).map_err(|e| RemoteError::new_ex(RemoteErrorType::IoError, e))
    }

    fn close(mut self: Box<Self>) -> RemoteResult<()> {
        trace!("closing {}", self.uri);
        self.file
            .flush()
            .map_err(|e| RemoteError::new_ex(RemoteErrorType::IoError, e))
    }
}
