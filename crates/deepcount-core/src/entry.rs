//! Enumerated directory entries and filesystem identities.

use std::path::PathBuf;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Filesystem-assigned unique identity of an entry, used for hard-link
/// deduplication.
///
/// Entries sharing an identity are counted as separate items but their
/// size is charged only once. The identity is a (inode, device) composite;
/// deduplicating by raw inode alone can conflate distinct files across
/// filesystem boundaries that reuse inode numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileIdentity {
    /// Inode number.
    pub inode: u64,
    /// Device ID.
    pub device: u64,
}

impl FileIdentity {
    /// Create a new identity.
    pub fn new(inode: u64, device: u64) -> Self {
        Self { inode, device }
    }
}

/// Kind of an enumerated child entry.
///
/// Only directories are descended into; everything else — regular files,
/// symlinks, sockets, devices — counts as a file item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// A directory, to be queued for enumeration.
    Directory,
    /// Any non-directory entry.
    Other,
}

impl EntryKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// One enumerated child of a directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildEntry {
    /// Entry name (not full path), lossily decoded for display.
    pub name: CompactString,

    /// Full path, resolved relative to the parent directory.
    pub path: PathBuf,

    /// Directory or not.
    pub kind: EntryKind,

    /// Byte size, when the filesystem reports one.
    pub size: Option<u64>,

    /// Unique identity, when the filesystem exposes one.
    pub identity: Option<FileIdentity>,
}
