//! Mutable aggregate counters for one traversal run.

use deepcount_core::SizeSnapshot;

/// Running totals for a traversal.
///
/// Owned exclusively by the traversal; no intermediate state is observable
/// from outside. Only [`Accumulator::snapshot`] with `size_known = true`,
/// taken after the frontier empties, ever reaches consumers.
#[derive(Debug, Default)]
pub struct Accumulator {
    file_items: u64,
    directory_items: u64,
    unreadable_items: u64,
    total_size: u64,
}

impl Accumulator {
    /// Create a zeroed accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a non-directory item.
    pub fn add_file(&mut self) {
        self.file_items += 1;
    }

    /// Count a directory item.
    pub fn add_directory(&mut self) {
        self.directory_items += 1;
    }

    /// Count a directory that could not be enumerated.
    pub fn add_unreadable(&mut self) {
        self.unreadable_items += 1;
    }

    /// Charge bytes to the total.
    pub fn add_size(&mut self, size: u64) {
        self.total_size += size;
    }

    /// Take a snapshot of the current totals.
    pub fn snapshot(&self, size_known: bool) -> SizeSnapshot {
        SizeSnapshot {
            file_items: self.file_items,
            directory_items: self.directory_items,
            unreadable_items: self.unreadable_items,
            total_size: self.total_size,
            size_known,
        }
    }
}
