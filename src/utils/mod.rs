//! # utils
//!
//! Crate utilities

pub mod error;
pub mod path;
#[cfg(target_family = "unix")]
pub mod smb;
