//! ## error
//!
//! Share error classification

use std::io;

use remotefs::RemoteErrorType;

/// Kind of the error reported when creating or opening an entry on the share fails with `kind`
pub fn io_error_kind(kind: io::ErrorKind) -> RemoteErrorType {
    match kind {
        io::ErrorKind::AlreadyExists => RemoteErrorType::FileCreateDenied,
        io::ErrorKind::NotFound => RemoteErrorType::NoSuchFileOrDirectory,
        io::ErrorKind::PermissionDenied => RemoteErrorType::FileCreateDenied,
        _ => RemoteErrorType::CouldNotOpenFile,
    }
}
