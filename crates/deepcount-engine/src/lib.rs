//! Asynchronous deep-count engine for deepcount.
//!
//! This crate computes aggregate statistics (file/directory/unreadable
//! counts, total byte size) for a directory subtree without blocking the
//! caller. Key properties:
//!
//! - **Cooperative cancellation** via a [`CancellationToken`] checked at
//!   every I/O suspension point
//! - **Hard-link deduplication** so multiply-linked files are sized once
//! - **Bounded batches** — one enumeration handle live at a time, children
//!   fetched in batches of `batch_size`
//! - **Best-effort degradation** — unreadable directories are counted and
//!   skipped, never fatal
//!
//! # Example
//!
//! ```rust,no_run
//! use deepcount_core::CountConfig;
//! use deepcount_engine::DeepCounter;
//!
//! # async fn example() -> Result<(), deepcount_core::CountError> {
//! let counter = DeepCounter::new(CountConfig::new("/path/to/count"));
//! let snapshot = counter.count().await?;
//!
//! println!("{} items, {} bytes", snapshot.item_count(), snapshot.total_size);
//! # Ok(())
//! # }
//! ```
//!
//! # Embedding
//!
//! [`SizeLoader`] wraps the counter for UI-style embedding: it owns at most
//! one in-flight run, publishes the final snapshot on a watch channel, and
//! exposes idempotent [`SizeLoader::stop`] and root reassignment.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

mod accumulator;
mod frontier;
mod identity;
mod loader;
mod scanner;
mod traversal;

pub use accumulator::Accumulator;
pub use frontier::Frontier;
pub use identity::IdentitySet;
pub use loader::{SizeLoader, query_root};
pub use scanner::{Batch, DirectoryScanner};
pub use traversal::DeepCounter;

// Re-export core types for convenience
pub use deepcount_core::{
    ChildEntry, CountConfig, CountError, EntryKind, FileIdentity, RootInfo, SizeSnapshot,
};
