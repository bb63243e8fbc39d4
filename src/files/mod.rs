//! # files
//!
//! File helpers working on any `RemoteShare`

mod copy;
mod mkdirs;

pub use copy::{copy, copy_with, CopyOptions, CopyOutcome, SkipReason, DEFAULT_CHUNK_SIZE};
pub use mkdirs::{mkdirs, mkdirs_parent};
