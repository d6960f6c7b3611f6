//! Identity tracking for hardlink deduplication.

use std::collections::HashSet;

use deepcount_core::FileIdentity;

/// Tracks seen identities to prevent double-counting hardlinks.
///
/// When a file has multiple hardlinks inside the counted subtree, its size
/// must be charged only once, to the first occurrence seen. Entries without
/// an identity (filesystems that expose none) are never deduplicated.
///
/// Mutation is serialized by the single-in-flight traversal model, so a
/// plain `HashSet` suffices. Lifetime is one traversal run; there is no
/// removal.
#[derive(Debug, Default)]
pub struct IdentitySet {
    seen: HashSet<FileIdentity>,
}

impl IdentitySet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an identity has been recorded. Absent identities are
    /// always reported as not seen.
    pub fn seen(&self, identity: &Option<FileIdentity>) -> bool {
        match identity {
            Some(id) => self.seen.contains(id),
            None => false,
        }
    }

    /// Record an identity. No-op for absent identities; idempotent for
    /// present ones.
    pub fn record(&mut self, identity: &Option<FileIdentity>) {
        if let Some(id) = identity {
            self.seen.insert(*id);
        }
    }

    /// Number of unique identities recorded.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
