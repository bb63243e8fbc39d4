//! # client
//!
//! Smb share backends

// -- unix share: libsmbclient

#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "unix")]
pub use unix::*;

// -- windows share: UNC redirector

#[cfg(target_family = "windows")]
mod windows;
#[cfg(target_family = "windows")]
pub use windows::*;
