//! # Windows client
//!
//! Windows implementation of the Smb share, backed by the UNC redirector

mod credentials;
mod file_stream;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

pub use credentials::SmbCredentials;
use file_stream::FileStream;
use remotefs::{RemoteError, RemoteErrorType, RemoteResult};
use windows_sys::Win32::Foundation::NO_ERROR;
use windows_sys::Win32::NetworkManagement::WNet::{
    WNetAddConnection2W, WNetCancelConnection2W, CONNECT_TEMPORARY, NETRESOURCEW,
    RESOURCETYPE_DISK,
};

use crate::share::{FileOpenArgs, RemoteFile, RemoteShare};
use crate::utils::error::io_error_kind;
use crate::utils::path as path_utils;

/// SMB share mounted through `\\server\share`
pub struct SmbShare {
    credentials: SmbCredentials,
    connected: bool,
}

impl SmbShare {
    pub fn new(credentials: SmbCredentials) -> Self {
        Self {
            credentials,
            connected: false,
        }
    }

    /// Mount the share with the configured credentials
    pub fn connect(&mut self) -> RemoteResult<()> {
        if self.connected {
            return Err(RemoteError::new(RemoteErrorType::AlreadyConnected));
        }
        let mut remote_name = to_wide(&self.unc_root());
        let username = self.credentials.username.as_deref().map(to_wide);
        let password = self.credentials.password.as_deref().map(to_wide);
        let resource = NETRESOURCEW {
            dwScope: 0,
            dwType: RESOURCETYPE_DISK,
            dwDisplayType: 0,
            dwUsage: 0,
            lpLocalName: std::ptr::null_mut(),
            lpRemoteName: remote_name.as_mut_ptr(),
            lpComment: std::ptr::null_mut(),
            lpProvider: std::ptr::null_mut(),
        };
        debug!("connecting to {}", self.unc_root());
        let result = unsafe {
            WNetAddConnection2W(
                &resource,
                password
                    .as_ref()
                    .map(|p| p.as_ptr())
                    .unwrap_or(std::ptr::null()),
                username
                    .as_ref()
                    .map(|u| u.as_ptr())
                    .unwrap_or(std::ptr::null()),
                CONNECT_TEMPORARY,
            )
        };
        if result != NO_ERROR {
            error!("failed to connect to {}: error {}", self.unc_root(), result);
            return Err(RemoteError::new_ex(
                RemoteErrorType::ConnectionError,
                format!("WNetAddConnection2W failed with error {result}"),
            ));
        }
        self.connected = true;
        Ok(())
    }

    /// Unmount the share
    pub fn disconnect(&mut self) -> RemoteResult<()> {
        if !self.connected {
            return Err(RemoteError::new(RemoteErrorType::NotConnected));
        }
        let remote_name = to_wide(&self.unc_root());
        debug!("disconnecting from {}", self.unc_root());
        let result = unsafe { WNetCancelConnection2W(remote_name.as_ptr(), 0, 1) };
        self.connected = false;
        if result != NO_ERROR {
            return Err(RemoteError::new_ex(
                RemoteErrorType::ConnectionError,
                format!("WNetCancelConnection2W failed with error {result}"),
            ));
        }
        Ok(())
    }

    // -- private

    fn unc_root(&self) -> String {
        format!(
            "\\\\{}\\{}",
            self.credentials.server.trim_matches(path_utils::SEPARATOR),
            self.credentials.share.trim_matches(path_utils::SEPARATOR)
        )
    }

    fn get_unc(&self, path: &str) -> PathBuf {
        let path = path_utils::normalize(path);
        if path.is_empty() {
            PathBuf::from(self.unc_root())
        } else {
            PathBuf::from(format!("{}\\{}", self.unc_root(), path))
        }
    }
}

impl Drop for SmbShare {
    fn drop(&mut self) {
        if self.connected {
            let _ = self.disconnect();
        }
    }
}

impl RemoteShare for SmbShare {
    fn open_file(
        &mut self,
        path: &str,
        args: &FileOpenArgs,
    ) -> RemoteResult<Box<dyn RemoteFile + '_>> {
        let path = self.get_unc(path);
        trace!("opening file at {} with {:?}", path.display(), args.disposition);
        let disposition = args.disposition;
        let file = OpenOptions::new()
            .read(args.access.can_read())
            .write(args.access.can_write() || disposition.truncates())
            .create(disposition.creates() && !disposition.exclusive())
            .create_new(disposition.exclusive())
            .truncate(disposition.truncates())
            .open(path.as_path())
            .map_err(|e| {
                error!("could not open {}: {}", path.display(), e);
                RemoteError::new_ex(io_error_kind(e.kind()), e)
            })?;
        Ok(Box::new(FileStream::from(file)))
    }

    fn folder_exists(&mut self, path: &str) -> RemoteResult<bool> {
        let path = self.get_unc(path);
        trace!("checking if directory {} exists...", path.display());
        match fs::metadata(path.as_path()) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(RemoteError::new_ex(RemoteErrorType::StatFailed, e)),
        }
    }

    fn mkdir(&mut self, path: &str) -> RemoteResult<()> {
        let path = self.get_unc(path);
        trace!("making directory at {}", path.display());
        fs::create_dir(path.as_path()).map_err(|e| RemoteError::new_ex(io_error_kind(e.kind()), e))
    }
}

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
