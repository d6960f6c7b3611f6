//! Traversal controller: drives the scanner over the frontier.

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use deepcount_core::{ChildEntry, CountConfig, CountError, EntryKind, SizeSnapshot};

use crate::accumulator::Accumulator;
use crate::frontier::Frontier;
use crate::identity::IdentitySet;
use crate::loader::query_root;
use crate::scanner::DirectoryScanner;

/// Computes the deep count for one root path.
///
/// Queries the root first; a non-directory root short-circuits to a
/// snapshot of its queried size and no traversal runs. A directory root
/// starts a [`TraversalRun`], which scans the subtree depth-first with a
/// single enumeration in flight at a time.
///
/// The cancellation token may be fired from anywhere (it is idempotent);
/// the run observes it at the next I/O boundary and returns
/// [`CountError::Cancelled`] without publishing anything.
#[derive(Debug)]
pub struct DeepCounter {
    config: CountConfig,
    cancel: CancellationToken,
}

impl DeepCounter {
    /// Create a counter with a fresh cancellation token.
    pub fn new(config: CountConfig) -> Self {
        Self::with_token(config, CancellationToken::new())
    }

    /// Create a counter observing an externally owned token.
    pub fn with_token(config: CountConfig, cancel: CancellationToken) -> Self {
        Self { config, cancel }
    }

    /// Get a handle to the cancellation token.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the deep count to completion.
    ///
    /// Root query failure is fatal to this request only and is never
    /// retried. Failures inside the subtree degrade to `unreadable_items`.
    pub async fn count(&self) -> Result<SizeSnapshot, CountError> {
        if self.cancel.is_cancelled() {
            return Err(CountError::Cancelled);
        }

        let info = query_root(&self.config.root).await?;
        if !info.is_dir() {
            return Ok(SizeSnapshot::of_file(info.size));
        }

        let run = TraversalRun::new(
            self.config.root.clone(),
            self.config.batch_size,
            self.cancel.clone(),
        );
        run.run().await.ok_or(CountError::Cancelled)
    }
}

/// State for one cancellable pass over a root's subtree.
///
/// Owns exactly one frontier, one identity set and one accumulator; nothing
/// is shared across runs and no intermediate state escapes.
struct TraversalRun {
    frontier: Frontier,
    seen: IdentitySet,
    acc: Accumulator,
    scanner: DirectoryScanner,
    cancel: CancellationToken,
}

impl TraversalRun {
    fn new(root: PathBuf, batch_size: usize, cancel: CancellationToken) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(root);
        Self {
            frontier,
            seen: IdentitySet::new(),
            acc: Accumulator::new(),
            scanner: DirectoryScanner::new(batch_size),
            cancel,
        }
    }

    /// Scan until the frontier empties or the token fires.
    ///
    /// Returns `None` on cancellation: the partial totals are discarded,
    /// never published. The token is checked before every open, before
    /// every batch fetch, and once more after the last fetch resumes —
    /// a token fired while the final fetch is in flight must not surface
    /// a snapshot. Dropping the enumeration handle on early return is the
    /// close.
    async fn run(mut self) -> Option<SizeSnapshot> {
        while let Some(dir) = self.frontier.pop_next() {
            if self.cancel.is_cancelled() {
                return None;
            }

            let mut handle = match self.scanner.open(&dir).await {
                Ok(handle) => handle,
                Err(err) => {
                    warn!(dir = %dir.display(), error = %err, "directory unreadable, skipping");
                    self.acc.add_unreadable();
                    continue;
                }
            };

            loop {
                if self.cancel.is_cancelled() {
                    return None;
                }

                let batch = self.scanner.next_batch(&dir, &mut handle).await;
                for child in batch.entries {
                    self.tally(child);
                }
                if batch.done {
                    break;
                }
            }
        }

        if self.cancel.is_cancelled() {
            return None;
        }

        debug!(
            pending = self.frontier.len(),
            unique = self.seen.len(),
            "traversal complete"
        );
        Some(self.acc.snapshot(true))
    }

    /// Fold one enumerated child into the totals.
    fn tally(&mut self, child: ChildEntry) {
        let duplicate = self.seen.seen(&child.identity);
        if !duplicate {
            self.seen.record(&child.identity);
        }

        match child.kind {
            EntryKind::Directory => {
                self.acc.add_directory();
                self.frontier.push(child.path);
            }
            EntryKind::Other => {
                // Even non-regular files count as files.
                self.acc.add_file();
                if !duplicate {
                    if let Some(size) = child.size {
                        self.acc.add_size(size);
                    }
                }
            }
        }
    }
}
