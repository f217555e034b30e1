use feeroute_core::{BlockHeight, HistoryEntry, Identity, PathId};

/// Append-only log of realized selection outcomes.
///
/// Ids are dense and monotonic from 0, so the entry with id `n` sits
/// at index `n`. Entries are never mutated or removed.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome and return the id assigned to it.
    pub fn append(
        &mut self,
        selected_path: PathId,
        actual_fee: u128,
        user: Identity,
        recorded_at: BlockHeight,
        succeeded: bool,
    ) -> u64 {
        let id = self.entries.len() as u64;
        self.entries.push(HistoryEntry {
            id,
            selected_path,
            actual_fee,
            user,
            recorded_at,
            succeeded,
        });
        id
    }

    /// Look up an entry by id.
    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.get(id as usize)
    }

    /// Number of entries logged so far.
    pub fn count(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Returns `true` if nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
