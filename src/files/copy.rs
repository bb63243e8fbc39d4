//! ## copy
//!
//! Upload of a local file to a share

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use remotefs::{RemoteError, RemoteErrorType, RemoteResult};

use super::mkdirs::mkdirs_parent;
use crate::share::{FileOpenArgs, RemoteShare};

/// Default size of the chunks read from the local file
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Why an upload didn't take place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No source was given
    NoSource,
    /// Source doesn't exist
    SourceNotFound,
    /// Source is not a regular file
    NotAFile,
    /// Source can't be read by the current user
    Unreadable,
    /// No destination was given
    NoDestination,
}

impl SkipReason {
    fn error_kind(&self) -> RemoteErrorType {
        match self {
            Self::NoSource | Self::SourceNotFound => RemoteErrorType::NoSuchFileOrDirectory,
            Self::NotAFile | Self::Unreadable | Self::NoDestination => RemoteErrorType::BadFile,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NoSource => "no source file",
            Self::SourceNotFound => "source file does not exist",
            Self::NotAFile => "source is not a regular file",
            Self::Unreadable => "source file is not readable",
            Self::NoDestination => "no destination path",
        };
        write!(f, "{reason}")
    }
}

/// Result of an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The file was uploaded; holds the amount of bytes written
    Written(u64),
    /// The upload preconditions didn't hold, nothing was done
    Skipped(SkipReason),
}

impl CopyOutcome {
    /// Amount of bytes written; zero when skipped
    pub fn bytes(&self) -> u64 {
        match self {
            Self::Written(bytes) => *bytes,
            Self::Skipped(_) => 0,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Upload options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOptions {
    pub(crate) overwrite: bool,
    pub(crate) strict: bool,
    pub(crate) create_parents: bool,
    pub(crate) chunk_size: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            strict: false,
            create_parents: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl CopyOptions {
    /// Replace the destination if it already exists, instead of failing
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Report unmet preconditions as errors, instead of skipping the upload
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Create the missing directories of the destination before uploading
    pub fn create_parents(mut self, create_parents: bool) -> Self {
        self.create_parents = create_parents;
        self
    }

    /// Size of the chunks read from the local file
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

/// Copy the local file at `source` to `dest_path` on the share, returning the amount of bytes written.
///
/// If `source` is missing, unreadable or not a regular file, or `dest_path` is `None`, nothing is done and `0` is returned.
/// Local I/O errors and share errors (e.g. `dest_path` exists and `overwrite` is false) are returned as errors.
pub fn copy<S: RemoteShare + ?Sized>(
    source: Option<&Path>,
    share: &mut S,
    dest_path: Option<&str>,
    overwrite: bool,
) -> RemoteResult<u64> {
    copy_with(
        source,
        share,
        dest_path,
        &CopyOptions::default().overwrite(overwrite),
    )
    .map(|outcome| outcome.bytes())
}

/// Copy the local file at `source` to `dest_path` on the share, with `options`.
///
/// Unmet preconditions yield `CopyOutcome::Skipped`, or an error in strict mode.
pub fn copy_with<S: RemoteShare + ?Sized>(
    source: Option<&Path>,
    share: &mut S,
    dest_path: Option<&str>,
    options: &CopyOptions,
) -> RemoteResult<CopyOutcome> {
    let source = match source {
        Some(source) => source,
        None => return skip(SkipReason::NoSource, options),
    };
    let local = match open_source(source)? {
        Ok(file) => file,
        Err(reason) => return skip(reason, options),
    };
    let dest_path = match dest_path {
        Some(dest_path) => dest_path,
        None => return skip(SkipReason::NoDestination, options),
    };
    if options.create_parents {
        mkdirs_parent(share, dest_path)?;
    }
    trace!(
        "uploading {} to {} (overwrite: {})",
        source.display(),
        dest_path,
        options.overwrite
    );
    let mut file = share.open_file(dest_path, &FileOpenArgs::upload(options.overwrite))?;
    let mut reader = BufReader::with_capacity(options.chunk_size, local);
    let written = file.write_from(&mut reader)?;
    file.close()?;
    debug!("wrote {} bytes to {}", written, dest_path);
    Ok(CopyOutcome::Written(written))
}

/// Open the local source file, if it exists, is a regular file and can be read
fn open_source(source: &Path) -> RemoteResult<Result<File, SkipReason>> {
    match fs::metadata(source) {
        Err(e) => {
            trace!("could not stat {}: {}", source.display(), e);
            return Ok(Err(SkipReason::SourceNotFound));
        }
        Ok(meta) if !meta.is_file() => return Ok(Err(SkipReason::NotAFile)),
        Ok(_) => {}
    }
    match File::open(source) {
        Ok(file) => Ok(Ok(file)),
        Err(e) => {
            error!("could not open {}: {}", source.display(), e);
            open_failure(e).map(Err)
        }
    }
}

/// A source which can't be opened for lack of permissions is skipped; any other failure is an error
fn open_failure(err: io::Error) -> RemoteResult<SkipReason> {
    match err.kind() {
        io::ErrorKind::PermissionDenied => Ok(SkipReason::Unreadable),
        _ => Err(RemoteError::new_ex(RemoteErrorType::IoError, err)),
    }
}

fn skip(reason: SkipReason, options: &CopyOptions) -> RemoteResult<CopyOutcome> {
    if options.strict {
        error!("upload refused: {}", reason);
        Err(RemoteError::new_ex(reason.error_kind(), reason))
    } else {
        debug!("upload skipped: {}", reason);
        Ok(CopyOutcome::Skipped(reason))
    }
}
