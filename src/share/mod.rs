//! # share
//!
//! The capability a connected SMB share exposes to the file helpers

use std::io::Read;

use remotefs::RemoteResult;

mod args;

pub use args::{
    AccessMask, CreateDisposition, CreateOptions, FileAttributes, FileOpenArgs, ShareAccess,
};

/// A connected, authenticated share.
///
/// Paths are share-relative and use `\` as separator, whatever the host OS is.
/// Implementors are not required to be synchronized; callers sharing a handle across threads must lock it.
pub trait RemoteShare {
    /// Open or create the file at `path` according to `args`.
    /// Backends may ignore the fields of `args` they can't express, such as share access or create options.
    fn open_file(&mut self, path: &str, args: &FileOpenArgs)
        -> RemoteResult<Box<dyn RemoteFile + '_>>;

    /// Returns whether `path` exists and is a directory
    fn folder_exists(&mut self, path: &str) -> RemoteResult<bool>;

    /// Create the directory at `path`. Its parent must exist.
    fn mkdir(&mut self, path: &str) -> RemoteResult<()>;
}

/// An open handle on a remote file.
///
/// Dropping the handle releases it; call [`RemoteFile::close`] to get flush errors reported.
pub trait RemoteFile {
    /// Write the whole content of `reader` into the file, returning the amount of bytes written
    fn write_from(&mut self, reader: &mut dyn Read) -> RemoteResult<u64>;

    /// Flush pending data and release the handle
    fn close(self: Box<Self>) -> RemoteResult<()>;
}

impl<S: RemoteShare + ?Sized> RemoteShare for &mut S {
    fn open_file(
        &mut self,
        path: &str,
        args: &FileOpenArgs,
    ) -> RemoteResult<Box<dyn RemoteFile + '_>> {
        (**self).open_file(path, args)
    }

    fn folder_exists(&mut self, path: &str) -> RemoteResult<bool> {
        (**self).folder_exists(path)
    }

    fn mkdir(&mut self, path: &str) -> RemoteResult<()> {
        (**self).mkdir(path)
    }
}

impl<S: RemoteShare + ?Sized> RemoteShare for Box<S> {
    fn open_file(
        &mut self,
        path: &str,
        args: &FileOpenArgs,
    ) -> RemoteResult<Box<dyn RemoteFile + '_>> {
        (**self).open_file(path, args)
    }

    fn folder_exists(&mut self, path: &str) -> RemoteResult<bool> {
        (**self).folder_exists(path)
    }

    fn mkdir(&mut self, path: &str) -> RemoteResult<()> {
        (**self).mkdir(path)
    }
}
