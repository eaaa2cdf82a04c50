//! Id-keyed diff between two snapshots.
//!
//! Two items are the same row when their ids match, and unchanged when all
//! their attributes are equal. The footer never takes part in a diff.

use std::collections::{HashMap, HashSet};

use crate::{ItemId, MailboxItem};

/// Row-level difference between two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    /// Positions in the new snapshot whose id was not in the old one.
    pub inserted: Vec<usize>,
    /// Positions in the old snapshot whose id is not in the new one.
    pub removed: Vec<usize>,
    /// Positions in the new snapshot whose item kept its id but changed.
    pub changed: Vec<usize>,
    /// Items present in both snapshots appear in a different relative order.
    pub reordered: bool,
}

impl SnapshotDiff {
    /// Returns true if the snapshots render identically.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
            && self.removed.is_empty()
            && self.changed.is_empty()
            && !self.reordered
    }
}

/// Computes the diff from `old` to `new`.
///
/// With duplicate ids the first occurrence is the one compared.
#[must_use]
pub fn diff_snapshots(old: &[MailboxItem], new: &[MailboxItem]) -> SnapshotDiff {
    let mut previous: HashMap<&ItemId, &MailboxItem> = HashMap::with_capacity(old.len());
    for item in old {
        previous.entry(&item.id).or_insert(item);
    }
    let current: HashSet<&ItemId> = new.iter().map(|item| &item.id).collect();

    let mut diff = SnapshotDiff::default();
    for (position, item) in new.iter().enumerate() {
        match previous.get(&item.id) {
            None => diff.inserted.push(position),
            Some(prev) if *prev != item => diff.changed.push(position),
            Some(_) => {}
        }
    }
    for (position, item) in old.iter().enumerate() {
        if !current.contains(&item.id) {
            diff.removed.push(position);
        }
    }

    let kept_old = old.iter().map(|item| &item.id).filter(|id| current.contains(id));
    let kept_new = new
        .iter()
        .map(|item| &item.id)
        .filter(|id| previous.contains_key(id));
    diff.reordered = !kept_old.eq(kept_new);

    diff
}
