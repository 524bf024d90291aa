//! Snapshot reconciliation
//!
//! The reconciler holds exactly the most recently applied snapshot and, for
//! each newly applied one, reports which sections and item identities were
//! inserted, removed, or retained. Membership tests run over hash sets so a
//! full diff stays linear in the total section and item count; the host may
//! re-render on every apply, and a quadratic scan would dominate for large
//! catalogs.

use std::collections::HashSet;

use crate::section::SectionKind;
use crate::snapshot::{ItemId, Snapshot};

/// Item-identity changes for one section of the new snapshot
///
/// `inserted` and `retained` preserve new-snapshot order; `removed`
/// preserves old-snapshot order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionDiff {
    pub kind: SectionKind,
    pub inserted: Vec<ItemId>,
    pub removed: Vec<ItemId>,
    pub retained: Vec<ItemId>,
}

impl SectionDiff {
    /// Whether this section's identity set survived unchanged
    pub fn is_unchanged(&self) -> bool {
        self.inserted.is_empty() && self.removed.is_empty()
    }
}

/// Structural changes between two consecutive snapshots
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotDiff {
    /// Sections present only in the new snapshot, in new order
    pub inserted_sections: Vec<SectionKind>,
    /// Sections present only in the old snapshot, in old order
    pub removed_sections: Vec<SectionKind>,
    /// One entry per section of the new snapshot, in display order
    pub sections: Vec<SectionDiff>,
}

impl SnapshotDiff {
    /// Whether nothing structural changed
    pub fn is_empty(&self) -> bool {
        self.inserted_sections.is_empty()
            && self.removed_sections.is_empty()
            && self.sections.iter().all(|s| s.is_unchanged())
    }

    /// Look up the diff entry for a section of the new snapshot
    pub fn section(&self, kind: &SectionKind) -> Option<&SectionDiff> {
        self.sections.iter().find(|s| &s.kind == kind)
    }

    /// Total inserted items across all sections
    pub fn inserted_count(&self) -> usize {
        self.sections.iter().map(|s| s.inserted.len()).sum()
    }

    /// Total retained items across all sections
    pub fn retained_count(&self) -> usize {
        self.sections.iter().map(|s| s.retained.len()).sum()
    }
}

/// Compute the structural difference between two snapshots
///
/// Pure function: the same pair always yields the same diff.
pub fn diff_snapshots(old: &Snapshot, new: &Snapshot) -> SnapshotDiff {
    let old_kinds: HashSet<&SectionKind> = old.section_kinds().collect();
    let new_kinds: HashSet<&SectionKind> = new.section_kinds().collect();

    let inserted_sections: Vec<SectionKind> = new
        .section_kinds()
        .filter(|k| !old_kinds.contains(*k))
        .cloned()
        .collect();
    let removed_sections: Vec<SectionKind> = old
        .section_kinds()
        .filter(|k| !new_kinds.contains(*k))
        .cloned()
        .collect();

    let sections = new
        .sections()
        .iter()
        .map(|section| {
            let old_items = old.items(&section.kind).unwrap_or(&[]);
            let old_set: HashSet<&ItemId> = old_items.iter().collect();
            let new_set: HashSet<&ItemId> = section.items.iter().collect();

            let (retained, inserted): (Vec<ItemId>, Vec<ItemId>) = section
                .items
                .iter()
                .cloned()
                .partition(|id| old_set.contains(id));
            let removed: Vec<ItemId> = old_items
                .iter()
                .filter(|id| !new_set.contains(*id))
                .cloned()
                .collect();

            SectionDiff {
                kind: section.kind.clone(),
                inserted,
                removed,
                retained,
            }
        })
        .collect();

    SnapshotDiff {
        inserted_sections,
        removed_sections,
        sections,
    }
}

/// Applies snapshots sequentially and reports structural changes
///
/// Holds only the most recently applied snapshot. Calls must be serialized
/// by the caller; there is no interior locking.
#[derive(Clone, Debug, Default)]
pub struct Reconciler {
    current: Snapshot,
}

impl Reconciler {
    /// Create a reconciler with an empty current snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently applied snapshot
    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    /// Replace the current snapshot and report what changed
    pub fn apply(&mut self, next: Snapshot) -> SnapshotDiff {
        let diff = diff_snapshots(&self.current, &next);
        self.current = next;
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorefrontError;

    fn snapshot(sections: &[(SectionKind, &[&str])]) -> Snapshot {
        try_snapshot(sections).unwrap()
    }

    fn try_snapshot(sections: &[(SectionKind, &[&str])]) -> Result<Snapshot, StorefrontError> {
        let mut snapshot = Snapshot::new();
        for (kind, items) in sections {
            snapshot.append_section(kind.clone())?;
            snapshot.append_items(kind, items.iter().map(|s| ItemId::from(*s)))?;
        }
        Ok(snapshot)
    }

    fn ids(raw: &[&str]) -> Vec<ItemId> {
        raw.iter().map(|s| ItemId::from(*s)).collect()
    }

    #[test]
    fn test_empty_to_nonempty_inserts_everything() {
        let mut reconciler = Reconciler::new();
        let diff = reconciler.apply(snapshot(&[
            (SectionKind::Promoted, &["p1", "p2"]),
            (SectionKind::Categories, &["c1"]),
        ]));

        assert_eq!(
            diff.inserted_sections,
            vec![SectionKind::Promoted, SectionKind::Categories]
        );
        assert!(diff.removed_sections.is_empty());
        assert_eq!(diff.inserted_count(), 3);
        assert_eq!(diff.retained_count(), 0);

        let promoted = diff.section(&SectionKind::Promoted).unwrap();
        assert_eq!(promoted.inserted, ids(&["p1", "p2"]));
        assert!(promoted.removed.is_empty());
        assert!(promoted.retained.is_empty());
    }

    #[test]
    fn test_identical_snapshot_retains_everything() {
        let mut reconciler = Reconciler::new();
        reconciler.apply(snapshot(&[
            (SectionKind::Promoted, &["p1", "p2"]),
            (SectionKind::standard("Popular this week"), &["s1", "s2", "s3"]),
        ]));
        let diff = reconciler.apply(snapshot(&[
            (SectionKind::Promoted, &["p1", "p2"]),
            (SectionKind::standard("Popular this week"), &["s1", "s2", "s3"]),
        ]));

        assert!(diff.is_empty());
        assert!(diff.inserted_sections.is_empty());
        assert!(diff.removed_sections.is_empty());
        assert_eq!(diff.inserted_count(), 0);
        assert_eq!(diff.retained_count(), 5);
    }

    #[test]
    fn test_overlapping_item_sets() {
        let mut reconciler = Reconciler::new();
        reconciler.apply(snapshot(&[(SectionKind::Promoted, &["1", "2"])]));
        let diff = reconciler.apply(snapshot(&[(SectionKind::Promoted, &["2", "3"])]));

        let promoted = diff.section(&SectionKind::Promoted).unwrap();
        assert_eq!(promoted.removed, ids(&["1"]));
        assert_eq!(promoted.inserted, ids(&["3"]));
        assert_eq!(promoted.retained, ids(&["2"]));
    }

    #[test]
    fn test_section_removal() {
        let mut reconciler = Reconciler::new();
        reconciler.apply(snapshot(&[
            (SectionKind::Promoted, &["p1"]),
            (SectionKind::standard("Essential picks"), &["e1", "e2"]),
            (SectionKind::Categories, &["c1"]),
        ]));
        let diff = reconciler.apply(snapshot(&[
            (SectionKind::Promoted, &["p1"]),
            (SectionKind::Categories, &["c1"]),
        ]));

        assert!(diff.inserted_sections.is_empty());
        assert_eq!(
            diff.removed_sections,
            vec![SectionKind::standard("Essential picks")]
        );
        // Diff entries cover only sections of the new snapshot
        assert_eq!(diff.sections.len(), 2);
        assert!(diff.section(&SectionKind::standard("Essential picks")).is_none());
        assert_eq!(diff.retained_count(), 2);
    }

    #[test]
    fn test_diff_is_pure_per_pair() {
        let old = snapshot(&[(SectionKind::Promoted, &["1", "2"])]);
        let new = snapshot(&[(SectionKind::Promoted, &["2", "3"])]);

        // Same pair, same diff, regardless of how state got there
        let direct = diff_snapshots(&old, &new);
        let mut reconciler = Reconciler::new();
        reconciler.apply(old.clone());
        let via_apply = reconciler.apply(new.clone());
        assert_eq!(direct, via_apply);

        let mut detour = Reconciler::new();
        detour.apply(snapshot(&[(SectionKind::Categories, &["c1"])]));
        detour.apply(old);
        let via_detour = detour.apply(new);
        assert_eq!(direct, via_detour);
    }

    #[test]
    fn test_order_preserved_in_diff() {
        let mut reconciler = Reconciler::new();
        reconciler.apply(snapshot(&[(
            SectionKind::Categories,
            &["a", "b", "c", "d"],
        )]));
        let diff = reconciler.apply(snapshot(&[(
            SectionKind::Categories,
            &["x", "d", "b", "y"],
        )]));

        let categories = diff.section(&SectionKind::Categories).unwrap();
        assert_eq!(categories.inserted, ids(&["x", "y"]));
        assert_eq!(categories.retained, ids(&["d", "b"]));
        assert_eq!(categories.removed, ids(&["a", "c"]));
    }

    #[test]
    fn test_current_tracks_last_applied() {
        let mut reconciler = Reconciler::new();
        assert!(reconciler.current().is_empty());

        let next = snapshot(&[(SectionKind::Promoted, &["p1"])]);
        reconciler.apply(next.clone());
        assert_eq!(reconciler.current(), &next);
    }
}
