//! Core types and traits for deepcount.
//!
//! This crate provides the fundamental data structures shared by the
//! deepcount engine and its front-ends: enumerated entries, identities
//! for hard-link deduplication, result snapshots, and configuration.

mod config;
mod entry;
mod error;
mod snapshot;

pub use config::{CountConfig, CountConfigBuilder, DEFAULT_BATCH_SIZE};
pub use entry::{ChildEntry, EntryKind, FileIdentity};
pub use error::CountError;
pub use snapshot::{RootInfo, SizeSnapshot};
