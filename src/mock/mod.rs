//! ## Mock
//!
//! Contains mock for test units

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::sync::{Arc, Mutex, MutexGuard};

use remotefs::{RemoteError, RemoteErrorType, RemoteResult};

use crate::share::{CreateDisposition, FileOpenArgs, RemoteFile, RemoteShare};
use crate::utils::path as path_utils;

// -- logger

#[allow(dead_code)]
pub fn logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// -- share

/// A call received by the `MemoryShare`, with the path exactly as the caller passed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FolderExists(String),
    Mkdir(String),
    OpenFile(String, CreateDisposition),
    Release(String),
}

#[derive(Default)]
struct State {
    dirs: BTreeSet<String>,
    files: BTreeMap<String, Vec<u8>>,
    denied: BTreeSet<String>,
    calls: Vec<Call>,
    open_handles: usize,
    fail_writes: bool,
    fail_lookups: bool,
}

/// In-memory share. Clones share the same namespace.
#[derive(Clone, Default)]
pub struct MemoryShare {
    state: Arc<Mutex<State>>,
}

#[allow(dead_code)]
impl MemoryShare {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add directory at `path`, along with its parents
    pub fn with_dir(self, path: &str) -> Self {
        {
            let mut state = self.state();
            let mut prefix = String::new();
            for segment in path_utils::segments(path) {
                if !prefix.is_empty() {
                    prefix.push(path_utils::SEPARATOR);
                }
                prefix.push_str(segment);
                state.dirs.insert(prefix.clone());
            }
        }
        self
    }

    /// Add file at `path` with `data`; parents are created too
    pub fn with_file(self, path: &str, data: &[u8]) -> Self {
        let share = match path_utils::parent(path) {
            Some(parent) => self.with_dir(parent),
            None => self,
        };
        share
            .state()
            .files
            .insert(path_utils::normalize(path), data.to_vec());
        share
    }

    /// Make any `mkdir` at `path` fail with access denied
    pub fn deny(self, path: &str) -> Self {
        self.state().denied.insert(path_utils::normalize(path));
        self
    }

    /// Make every write fail
    pub fn fail_writes(self) -> Self {
        self.state().fail_writes = true;
        self
    }

    /// Make every existence check fail
    pub fn fail_lookups(self) -> Self {
        self.state().fail_lookups = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// Paths passed to `mkdir`, in call order
    pub fn mkdir_calls(&self) -> Vec<String> {
        self.state()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Mkdir(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    /// Existing directories, normalized
    pub fn dirs(&self) -> Vec<String> {
        self.state().dirs.iter().cloned().collect()
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.state().files.get(&path_utils::normalize(path)).cloned()
    }

    pub fn open_handles(&self) -> usize {
        self.state().open_handles
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

impl State {
    fn is_dir(&self, path: &str) -> bool {
        path.is_empty() || self.dirs.contains(path)
    }

    fn check_parent(&self, path: &str) -> RemoteResult<()> {
        if self.is_dir(path_utils::parent(path).unwrap_or_default()) {
            Ok(())
        } else {
            Err(RemoteError::new_ex(
                RemoteErrorType::NoSuchFileOrDirectory,
                "object path not found",
            ))
        }
    }
}

impl RemoteShare for MemoryShare {
    fn open_file(
        &mut self,
        path: &str,
        args: &FileOpenArgs,
    ) -> RemoteResult<Box<dyn RemoteFile + '_>> {
        let mut state = self.state();
        state
            .calls
            .push(Call::OpenFile(path.to_string(), args.disposition));
        let key = path_utils::normalize(path);
        if state.is_dir(&key) {
            return Err(RemoteError::new_ex(
                RemoteErrorType::FileCreateDenied,
                "file is a directory",
            ));
        }
        state.check_parent(&key)?;
        let exists = state.files.contains_key(&key);
        if exists && args.disposition.exclusive() {
            return Err(RemoteError::new_ex(
                RemoteErrorType::FileCreateDenied,
                "object name collision",
            ));
        }
        if !exists && args.disposition.requires_existing() {
            return Err(RemoteError::new_ex(
                RemoteErrorType::NoSuchFileOrDirectory,
                "object name not found",
            ));
        }
        if !exists || args.disposition.truncates() {
            state.files.insert(key.clone(), Vec::new());
        }
        state.open_handles += 1;
        drop(state);
        Ok(Box::new(MemoryFile {
            state: self.state.clone(),
            key,
            path: path.to_string(),
        }))
    }

    fn folder_exists(&mut self, path: &str) -> RemoteResult<bool> {
        let mut state = self.state();
        state.calls.push(Call::FolderExists(path.to_string()));
        if state.fail_lookups {
            return Err(RemoteError::new_ex(
                RemoteErrorType::ConnectionError,
                "connection reset",
            ));
        }
        Ok(state.is_dir(&path_utils::normalize(path)))
    }

    fn mkdir(&mut self, path: &str) -> RemoteResult<()> {
        let mut state = self.state();
        state.calls.push(Call::Mkdir(path.to_string()));
        let key = path_utils::normalize(path);
        if state.denied.contains(&key) {
            return Err(RemoteError::new_ex(
                RemoteErrorType::FileCreateDenied,
                "access denied",
            ));
        }
        if state.is_dir(&key) || state.files.contains_key(&key) {
            return Err(RemoteError::new_ex(
                RemoteErrorType::FileCreateDenied,
                "object name collision",
            ));
        }
        state.check_parent(&key)?;
        state.dirs.insert(key);
        Ok(())
    }
}

/// Handle on a `MemoryShare` file; data is stored as soon as it's written
struct MemoryFile {
    state: Arc<Mutex<State>>,
    key: String,
    path: String,
}

impl RemoteFile for MemoryFile {
    fn write_from(&mut self, reader: &mut dyn Read) -> RemoteResult<u64> {
        if self.state.lock().unwrap().fail_writes {
            return Err(RemoteError::new_ex(
                RemoteErrorType::IoError,
                "connection reset",
            ));
        }
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| RemoteError::new_ex(RemoteErrorType::IoError, e))?;
        let mut state = self.state.lock().unwrap();
        state
            .files
            .entry(self.key.clone())
            .or_default()
            .extend_from_slice(&data);
        Ok(data.len() as u64)
    }

    fn close(self: Box<Self>) -> RemoteResult<()> {
        Ok(())
    }
}

impl Drop for MemoryFile {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.open_handles -= 1;
            state.calls.push(Call::Release(self.path.clone()));
        }
    }
}

#[cfg(test)]
mod test {

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn should_seed_share() {
        let share = MemoryShare::new()
            .with_dir("\\a\\b")
            .with_file("x\\y.txt", b"hello");
        assert_eq!(share.dirs(), vec!["a", "a\\b", "x"]);
        assert_eq!(share.file("\\x\\y.txt").unwrap(), b"hello");
        assert!(share.calls().is_empty());
    }

    #[test]
    fn should_reject_mkdir_without_parent() {
        let mut share = MemoryShare::new();
        assert_eq!(
            share.mkdir("a\\b").unwrap_err().kind,
            RemoteErrorType::NoSuchFileOrDirectory
        );
        assert!(share.mkdir("a\\").is_ok());
        assert_eq!(
            share.mkdir("a").unwrap_err().kind,
            RemoteErrorType::FileCreateDenied
        );
    }

    #[test]
    fn should_release_handles_on_drop() {
        let mut share = MemoryShare::new();
        {
            let _file = share.open_file("a.txt", &FileOpenArgs::upload(false)).unwrap();
        }
        assert_eq!(share.open_handles(), 0);
        assert_eq!(
            share.calls().last().unwrap(),
            &Call::Release("a.txt".to_string())
        );
    }
}
