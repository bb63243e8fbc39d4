//! ## args
//!
//! SMB2 CREATE request arguments

use bitflags::bitflags;

bitflags! {
    /// Access rights requested when opening a file or directory
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccessMask: u32 {
        const FILE_READ_DATA = 0x0000_0001;
        const FILE_LIST_DIRECTORY = 0x0000_0001;
        const FILE_WRITE_DATA = 0x0000_0002;
        const FILE_ADD_FILE = 0x0000_0002;
        const FILE_APPEND_DATA = 0x0000_0004;
        const FILE_ADD_SUBDIRECTORY = 0x0000_0004;
        const FILE_READ_ATTRIBUTES = 0x0000_0080;
        const FILE_WRITE_ATTRIBUTES = 0x0000_0100;
        const DELETE = 0x0001_0000;
        const SYNCHRONIZE = 0x0010_0000;
        const GENERIC_ALL = 0x1000_0000;
        const GENERIC_EXECUTE = 0x2000_0000;
        const GENERIC_WRITE = 0x4000_0000;
        const GENERIC_READ = 0x8000_0000;
    }
}

impl AccessMask {
    /// Whether these rights allow reading file data
    pub fn can_read(&self) -> bool {
        self.intersects(Self::GENERIC_READ | Self::GENERIC_ALL | Self::FILE_READ_DATA)
    }

    /// Whether these rights allow writing file data
    pub fn can_write(&self) -> bool {
        self.intersects(
            Self::GENERIC_WRITE | Self::GENERIC_ALL | Self::FILE_WRITE_DATA | Self::FILE_APPEND_DATA,
        )
    }
}

bitflags! {
    /// Attributes applied to a newly created file
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileAttributes: u32 {
        const READONLY = 0x0000_0001;
        const HIDDEN = 0x0000_0002;
        const SYSTEM = 0x0000_0004;
        const DIRECTORY = 0x0000_0010;
        const ARCHIVE = 0x0000_0020;
        const NORMAL = 0x0000_0080;
        const TEMPORARY = 0x0000_0100;
    }
}

bitflags! {
    /// Sharing mode granted to other openers while the handle is held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShareAccess: u32 {
        const FILE_SHARE_READ = 0x0000_0001;
        const FILE_SHARE_WRITE = 0x0000_0002;
        const FILE_SHARE_DELETE = 0x0000_0004;
        const ALL = 0x0000_0007;
    }
}

bitflags! {
    /// Options applied when creating or opening the file
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CreateOptions: u32 {
        const FILE_DIRECTORY_FILE = 0x0000_0001;
        const FILE_WRITE_THROUGH = 0x0000_0002;
        const FILE_SEQUENTIAL_ONLY = 0x0000_0004;
        const FILE_NON_DIRECTORY_FILE = 0x0000_0040;
        const FILE_DELETE_ON_CLOSE = 0x0000_1000;
    }
}

/// What the server must do depending on whether the target already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CreateDisposition {
    /// Replace if exists, create otherwise
    Supersede = 0,
    /// Open if exists, fail otherwise
    Open = 1,
    /// Fail if exists, create otherwise
    Create = 2,
    /// Open if exists, create otherwise
    OpenIf = 3,
    /// Overwrite if exists, fail otherwise
    Overwrite = 4,
    /// Overwrite if exists, create otherwise
    OverwriteIf = 5,
}

impl CreateDisposition {
    /// Whether the disposition creates the file when it is missing
    pub fn creates(&self) -> bool {
        matches!(
            self,
            Self::Supersede | Self::Create | Self::OpenIf | Self::OverwriteIf
        )
    }

    /// Whether the disposition discards the content of an existing file
    pub fn truncates(&self) -> bool {
        matches!(self, Self::Supersede | Self::Overwrite | Self::OverwriteIf)
    }

    /// Whether the disposition fails on an existing file
    pub fn exclusive(&self) -> bool {
        matches!(self, Self::Create)
    }

    /// Whether the disposition fails on a missing file
    pub fn requires_existing(&self) -> bool {
        !self.creates()
    }
}

/// Arguments of an open-or-create call on a [`crate::RemoteShare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOpenArgs {
    pub access: AccessMask,
    pub attributes: FileAttributes,
    pub share_access: ShareAccess,
    pub disposition: CreateDisposition,
    pub options: CreateOptions,
}

impl Default for FileOpenArgs {
    fn default() -> Self {
        Self {
            access: AccessMask::GENERIC_READ,
            attributes: FileAttributes::NORMAL,
            share_access: ShareAccess::FILE_SHARE_READ,
            disposition: CreateDisposition::Open,
            options: CreateOptions::empty(),
        }
    }
}

impl FileOpenArgs {
    /// Arguments used to upload a file: exclusive write access, normal attributes, write-shareable.
    /// The disposition is `OverwriteIf` when `overwrite` is set, `Create` otherwise.
    pub fn upload(overwrite: bool) -> Self {
        Self {
            access: AccessMask::GENERIC_WRITE,
            attributes: FileAttributes::NORMAL,
            share_access: ShareAccess::FILE_SHARE_WRITE,
            disposition: if overwrite {
                CreateDisposition::OverwriteIf
            } else {
                CreateDisposition::Create
            },
            options: CreateOptions::empty(),
        }
    }

    pub fn access(mut self, access: AccessMask) -> Self {
        self.access = access;
        self
    }

    pub fn attributes(mut self, attributes: FileAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn share_access(mut self, share_access: ShareAccess) -> Self {
        self.share_access = share_access;
        self
    }

    pub fn disposition(mut self, disposition: CreateDisposition) -> Self {
        self.disposition = disposition;
        self
    }

    pub fn options(mut self, options: CreateOptions) -> Self {
        self.options = options;
        self
    }
}
