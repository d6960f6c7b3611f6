//! Batched asynchronous enumeration of one directory's children.

use std::io;
use std::path::Path;

use compact_str::CompactString;
use tokio::fs::{self, DirEntry, ReadDir};
use tracing::{debug, warn};

use deepcount_core::{ChildEntry, EntryKind, FileIdentity};

/// One batch of enumerated children.
#[derive(Debug)]
pub struct Batch {
    /// Classified children, at most `batch_size` of them.
    pub entries: Vec<ChildEntry>,
    /// Whether the enumeration is exhausted (or failed mid-stream).
    pub done: bool,
}

/// Enumerates the direct children of one directory in bounded batches.
///
/// Symbolic links are classified from non-following metadata and never
/// descended into, so cycles through symlinks cannot occur. The enumeration
/// handle is a [`ReadDir`] released on drop, which covers every exit path —
/// completion, failure, and cancellation — with a single close.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryScanner {
    batch_size: usize,
}

impl DirectoryScanner {
    /// Create a scanner fetching up to `batch_size` children per request.
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Open an enumeration for `dir`.
    ///
    /// Failure here (permission denied, vanished directory, I/O error) is
    /// not fatal to a traversal: the caller records one unreadable item and
    /// moves on.
    pub async fn open(&self, dir: &Path) -> io::Result<ReadDir> {
        debug!(dir = %dir.display(), "enumerating directory");
        fs::read_dir(dir).await
    }

    /// Fetch the next batch of children from an open enumeration.
    ///
    /// A read error mid-stream ends the enumeration with whatever was
    /// already listed; the partial listing is accepted, never retried.
    pub async fn next_batch(&self, dir: &Path, handle: &mut ReadDir) -> Batch {
        let mut entries = Vec::new();
        let mut done = false;

        while entries.len() < self.batch_size {
            match handle.next_entry().await {
                Ok(Some(entry)) => entries.push(classify(entry).await),
                Ok(None) => {
                    done = true;
                    break;
                }
                Err(err) => {
                    warn!(
                        dir = %dir.display(),
                        error = %err,
                        "read error mid-enumeration, accepting partial listing"
                    );
                    done = true;
                    break;
                }
            }
        }

        Batch { entries, done }
    }
}

/// Classify one directory entry.
///
/// Uses `DirEntry::metadata`, which does not traverse symlinks, so a link
/// to a directory comes back as a non-directory item. An entry whose
/// metadata cannot be read still counts as a file item, just with unknown
/// size and no identity.
async fn classify(entry: DirEntry) -> ChildEntry {
    let name = CompactString::new(entry.file_name().to_string_lossy());
    let path = entry.path();

    match entry.metadata().await {
        Ok(metadata) => {
            let kind = if metadata.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };
            ChildEntry {
                name,
                path,
                kind,
                size: Some(metadata.len()),
                identity: identity_of(&metadata),
            }
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "metadata unavailable for entry");
            ChildEntry {
                name,
                path,
                kind: EntryKind::Other,
                size: None,
                identity: None,
            }
        }
    }
}

// Cross-platform identity helpers

/// Extract the (inode, device) identity from metadata.
#[cfg(unix)]
fn identity_of(metadata: &std::fs::Metadata) -> Option<FileIdentity> {
    use std::os::unix::fs::MetadataExt;
    Some(FileIdentity::new(metadata.ino(), metadata.dev()))
}

#[cfg(not(unix))]
fn identity_of(_metadata: &std::fs::Metadata) -> Option<FileIdentity> {
    // No stable identity exposed; hard links cannot be deduplicated.
    None
}
