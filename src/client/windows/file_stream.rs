use std::fs::File;
use std::io::{self, Read, Write};

use remotefs::{RemoteError, RemoteErrorType, RemoteResult};

use crate::share::RemoteFile;

/// A file opened on the share through its UNC path
pub struct FileStream {
    file: File,
}

impl From<File> for FileStream {
    fn from(file: File) -> Self {
        Self { file }
    }
}

impl RemoteFile for FileStream {
    fn write_from(&mut self, reader: &mut dyn Read) -> RemoteResult<u64> {
        io::copy(reader, &mut self.file).map_err(|e| RemoteError::new_ex(RemoteErrorType::IoError, e))
    }

    fn close(mut self: Box<Self>) -> RemoteResult<()> {
        self.file
            .flush()
            .and_then(|_| self.file.sync_all())
            .map_err(|e| RemoteError::new_ex(RemoteErrorType::IoError, e))
    }
}
