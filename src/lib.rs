#![crate_name = "smbfiles"]
#![crate_type = "lib"]

//! # smbfiles
//!
//! smbfiles provides file helpers on top of an SMB share: upload a local file to the share,
//! and create nested directories on it.
//!
//! ## Get started
//!
//! First of all you need to add **remotefs** and **smbfiles** to your project dependencies:
//!
//! ```toml
//! remotefs = "^0.3"
//! smbfiles = "^0.1"
//! ```
//!
//! these features are supported:
//!
//! - `no-log`: disable logging. By default, this library will log via the `log` crate.
//!
//! ### Upload a file (UNIX)
//!
//! ```rust,no_run
//! use smbfiles::{copy_with, mkdirs, CopyOptions, SmbCredentials, SmbOptions, SmbShare};
//! use std::path::Path;
//!
//! let mut share = SmbShare::try_new(
//!     SmbCredentials::default()
//!         .server("smb://localhost:3445")
//!         .share("/temp")
//!         .username("test")
//!         .password("test")
//!         .workgroup("pavao"),
//!     SmbOptions::default()
//!         .case_sensitive(true)
//!         .one_share_per_server(true),
//! )
//! .unwrap();
//!
//! // connect
//! assert!(share.connect().is_ok());
//! // make directories
//! assert!(mkdirs(&mut share, "\\reports\\2024\\q1").is_ok());
//! // upload file
//! let outcome = copy_with(
//!     Some(Path::new("/tmp/report.pdf")),
//!     &mut share,
//!     Some("\\reports\\2024\\q1\\report.pdf"),
//!     &CopyOptions::default().overwrite(true).strict(true),
//! )
//! .unwrap();
//! println!("wrote {} bytes", outcome.bytes());
//! ```
//!
//! Any type implementing [`RemoteShare`] can be used in place of `SmbShare`.
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]

// -- crates
#[macro_use]
extern crate log;

mod client;
mod files;
mod share;

#[cfg(target_family = "unix")]
pub use client::{SmbCredentials, SmbEncryptionLevel, SmbOptions, SmbShare, SmbShareMode};
#[cfg(target_family = "windows")]
pub use client::{SmbCredentials, SmbShare};
pub use files::{
    copy, copy_with, mkdirs, mkdirs_parent, CopyOptions, CopyOutcome, SkipReason,
    DEFAULT_CHUNK_SIZE,
};
pub use share::{
    AccessMask, CreateDisposition, CreateOptions, FileAttributes, FileOpenArgs, RemoteFile,
    RemoteShare, ShareAccess,
};

// -- utils
pub(crate) mod utils;
// -- mock
#[cfg(test)]
pub(crate) mod mock;
