//! Owning loader: at most one in-flight run, one completion notification.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use deepcount_core::{CountConfig, CountError, EntryKind, RootInfo, SizeSnapshot};

use crate::traversal::DeepCounter;

/// Query the root entry's own metadata.
///
/// This follows symlinks, unlike subtree enumeration, so a symlink root
/// resolves to its target. A plain point query; the result's kind decides
/// whether a traversal starts at all.
pub async fn query_root(path: &Path) -> Result<RootInfo, CountError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|err| CountError::io(path, err))?;

    let name = path
        .file_name()
        .map(|n| CompactString::new(n.to_string_lossy()))
        .unwrap_or_else(|| CompactString::new(path.to_string_lossy()));

    Ok(RootInfo {
        name,
        kind: if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        },
        size: metadata.len(),
        modified: metadata.modified().ok(),
    })
}

/// Owns deep-count runs for a root path and publishes their results.
///
/// At most one run is live at a time. [`start`] tears down any in-flight
/// run before launching a new one; [`stop`] is idempotent and safe with no
/// run active. The watch channel holds `None` until a run completes, then
/// the final snapshot — set exactly once per successful run, never on
/// cancellation. Dropping the loader cancels whatever is in flight.
///
/// [`start`]: SizeLoader::start
/// [`stop`]: SizeLoader::stop
#[derive(Debug)]
pub struct SizeLoader {
    config: CountConfig,
    cancel: CancellationToken,
    tx: watch::Sender<Option<SizeSnapshot>>,
    task: Option<JoinHandle<()>>,
}

impl SizeLoader {
    /// Create a loader for the configured root. No run starts yet.
    pub fn new(config: CountConfig) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            config,
            cancel: CancellationToken::new(),
            tx,
            task: None,
        }
    }

    /// Subscribe to the result channel.
    ///
    /// The value is reset to `None` at each start and becomes `Some` only
    /// when a run completes without being cancelled.
    pub fn subscribe(&self) -> watch::Receiver<Option<SizeSnapshot>> {
        self.tx.subscribe()
    }

    /// Launch a run, cancelling any in-flight one first.
    pub fn start(&mut self) {
        self.stop();
        self.tx.send_replace(None);

        let counter = DeepCounter::with_token(self.config.clone(), self.cancel.clone());
        let root = self.config.root.clone();
        let tx = self.tx.clone();

        self.task = Some(tokio::spawn(async move {
            match counter.count().await {
                Ok(snapshot) => {
                    tx.send_replace(Some(snapshot));
                }
                Err(err) if err.is_cancelled() => {}
                Err(err) => {
                    warn!(root = %root.display(), error = %err, "unable to query root");
                }
            }
        }));
    }

    /// Cancel any in-flight run.
    ///
    /// Idempotent; a no-op when nothing is running. The token is replaced
    /// afterwards so the loader stays usable for a new root.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.task.take();
    }

    /// Point the loader at a new root, discarding any in-flight run.
    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.stop();
        self.config.root = root.into();
        self.start();
    }

    /// Wait for the in-flight run to finish, if any.
    pub async fn wait(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for SizeLoader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
