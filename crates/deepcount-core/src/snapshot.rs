//! Published traversal results and root metadata.

use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::entry::EntryKind;

/// Aggregate statistics for a completed deep count.
///
/// Published exactly once per successful traversal; a cancelled run never
/// publishes one. `size_known` is true only when the traversal ran to
/// completion (or the root was not a directory and its size was taken
/// directly from the root query), so a partial total is never mistaken
/// for a real one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSnapshot {
    /// Number of non-directory items in the subtree.
    pub file_items: u64,
    /// Number of directories in the subtree.
    pub directory_items: u64,
    /// Number of directories that could not be enumerated.
    pub unreadable_items: u64,
    /// Total byte size, hard links charged once.
    pub total_size: u64,
    /// Whether `total_size` covers the whole subtree.
    pub size_known: bool,
}

impl SizeSnapshot {
    /// Snapshot for a non-directory root: the queried size, no items,
    /// no traversal needed.
    pub fn of_file(size: u64) -> Self {
        Self {
            total_size: size,
            size_known: true,
            ..Self::default()
        }
    }

    /// Total counted items, files and directories together.
    pub fn item_count(&self) -> u64 {
        self.file_items + self.directory_items
    }
}

/// Result of the root metadata query.
///
/// The query follows symlinks, unlike subtree enumeration, so a symlink
/// root resolves to its target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootInfo {
    /// Display name of the root entry.
    pub name: CompactString,
    /// Directory or not; a directory triggers the deep count.
    pub kind: EntryKind,
    /// Size of the root entry itself.
    pub size: u64,
    /// Last modification time, if available.
    pub modified: Option<SystemTime>,
}

impl RootInfo {
    /// Check if the root is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}
