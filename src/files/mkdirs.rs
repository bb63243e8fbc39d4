//! ## mkdirs
//!
//! Nested directory creation on a share

use remotefs::RemoteResult;

use crate::share::RemoteShare;
use crate::utils::path as path_utils;

/// Make sure every directory of the backslash separated `path` exists on the share, creating the missing ones.
///
/// Leading separators are ignored; a single segment path is created as is, otherwise each prefix
/// `a\`, `a\b\`, ... is checked and created in order. Running it on an existing tree only performs existence checks.
pub fn mkdirs<S: RemoteShare + ?Sized>(share: &mut S, path: &str) -> RemoteResult<()> {
    let path = path_utils::trim_leading(path);
    if path.is_empty() {
        trace!("nothing to create: empty path");
        return Ok(());
    }
    if path_utils::is_single_segment(path) {
        if !share.folder_exists(path)? {
            debug!("creating directory {}", path);
            create_dir(share, path)?;
        }
        return Ok(());
    }
    let mut prefix = String::with_capacity(path.len() + 1);
    for segment in path_utils::segments(path) {
        prefix.push_str(segment);
        prefix.push(path_utils::SEPARATOR);
        if !share.folder_exists(&prefix)? {
            debug!("creating directory {}", prefix);
            create_dir(share, &prefix)?;
        }
    }
    Ok(())
}

/// Make sure the directory containing the file at `path` exists; the last segment names the file and is not created.
pub fn mkdirs_parent<S: RemoteShare + ?Sized>(share: &mut S, path: &str) -> RemoteResult<()> {
    match path_utils::parent(path) {
        Some(parent) => mkdirs(share, &format!("{}{}", parent, path_utils::SEPARATOR)),
        None => Ok(()),
    }
}

/// Create `path`. A failure is forgiven when the directory turns out to exist anyway,
/// which happens when another client created it between the check and the call.
fn create_dir<S: RemoteShare + ?Sized>(share: &mut S, path: &str) -> RemoteResult<()> {
    match share.mkdir(path) {
        Ok(()) => Ok(()),
        Err(err) => {
            if share.folder_exists(path).unwrap_or(false) {
                debug!("directory {} was created concurrently", path);
                Ok(())
            } else {
                error!("could not create directory {}: {}", path, err);
                Err(err)
            }
        }
    }
}
