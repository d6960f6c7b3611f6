//! Worklist of directories pending enumeration.

use std::path::PathBuf;

/// LIFO worklist of directories still to be scanned.
///
/// Newly discovered subdirectories are scanned before siblings discovered
/// earlier, giving depth-first order. The order is a design choice, not a
/// correctness requirement, but it is deterministic within a run.
///
/// Each directory is discovered exactly once (as a child of its parent) and
/// pushed exactly once, so no visited-set is needed on top.
#[derive(Debug, Default)]
pub struct Frontier {
    pending: Vec<PathBuf>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a directory for enumeration.
    pub fn push(&mut self, dir: PathBuf) {
        self.pending.push(dir);
    }

    /// Take the next directory to scan, most recently discovered first.
    pub fn pop_next(&mut self) -> Option<PathBuf> {
        self.pending.pop()
    }

    /// Number of directories still queued.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut frontier = Frontier::new();
        frontier.push(PathBuf::from("/a"));
        frontier.push(PathBuf::from("/a/b"));
        frontier.push(PathBuf::from("/a/b/c"));

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop_next(), Some(PathBuf::from("/a/b/c")));
        assert_eq!(frontier.pop_next(), Some(PathBuf::from("/a/b")));
        assert_eq!(frontier.pop_next(), Some(PathBuf::from("/a")));
        assert_eq!(frontier.pop_next(), None);
        assert!(frontier.is_empty());
    }
}
