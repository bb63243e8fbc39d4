//! # smb utils
//!
//! SMB protocol utilities

use std::io;

use libc::mode_t;
use pavao::{SmbError, SmbOpenOptions, SmbStat};
use remotefs::RemoteErrorType;

use super::error::io_error_kind;
use crate::share::{FileAttributes, FileOpenArgs};

/// Mode of files created through the share
const FILE_MODE: mode_t = 0o644;
/// Mode of read-only files created through the share
const READONLY_FILE_MODE: mode_t = 0o444;

/// Convert `FileOpenArgs` to the `SmbOpenOptions` libsmbclient understands.
/// Share access and create options have no libsmbclient counterpart.
pub fn open_options(args: &FileOpenArgs) -> SmbOpenOptions {
    let mode = if args.attributes.contains(FileAttributes::READONLY) {
        READONLY_FILE_MODE
    } else {
        FILE_MODE
    };
    SmbOpenOptions::default()
        .read(args.access.can_read())
        .write(args.access.can_write())
        .create(args.disposition.creates())
        .exclusive(args.disposition.exclusive())
        .truncate(args.disposition.truncates())
        .mode(mode)
}

/// Returns whether stat describes a directory
pub fn is_dir(stat: &SmbStat) -> bool {
    stat.mode.is_dir()
}

/// Kind of the error reported when creating or opening an entry fails with `err`
pub fn error_kind(err: &SmbError) -> RemoteErrorType {
    match err {
        SmbError::Io(e) => io_error_kind(e.kind()),
        _ => RemoteErrorType::CouldNotOpenFile,
    }
}

/// Returns whether `err` tells there's nothing at the requested path
pub fn is_not_found(err: &SmbError) -> bool {
    matches!(err, SmbError::Io(e) if e.kind() == io::ErrorKind::NotFound)
}
