//! Identity snapshots of the browse screen
//!
//! A snapshot is an immutable description of every section and item identity
//! rendered at a point in time. The host builds a fresh snapshot per data
//! refresh and hands it to the reconciler, which diffs it against the
//! previous one.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::StorefrontError;
use crate::section::SectionKind;

/// Opaque stable identifier for one catalog record
///
/// Unique within its owning section in any snapshot, and stable across
/// snapshots for the same logical record so retained slots can be reused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One section and its ordered item identities
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotSection {
    pub kind: SectionKind,
    pub items: Vec<ItemId>,
}

/// Ordered sections with their ordered item identities
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    sections: Vec<SnapshotSection>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section after the existing ones
    ///
    /// Fails if the snapshot already contains this section kind.
    pub fn append_section(&mut self, kind: SectionKind) -> Result<(), StorefrontError> {
        if self.sections.iter().any(|s| s.kind == kind) {
            return Err(StorefrontError::DuplicateSection(kind));
        }
        self.sections.push(SnapshotSection {
            kind,
            items: Vec::new(),
        });
        Ok(())
    }

    /// Append items to a previously appended section
    ///
    /// Fails if the section is absent or any id repeats within the section.
    pub fn append_items(
        &mut self,
        kind: &SectionKind,
        ids: impl IntoIterator<Item = ItemId>,
    ) -> Result<(), StorefrontError> {
        let section = self
            .sections
            .iter_mut()
            .find(|s| &s.kind == kind)
            .ok_or_else(|| StorefrontError::UnknownSection(kind.clone()))?;

        let mut seen: HashSet<ItemId> = section.items.iter().cloned().collect();
        for id in ids {
            if !seen.insert(id.clone()) {
                return Err(StorefrontError::DuplicateItem(id));
            }
            section.items.push(id);
        }
        Ok(())
    }

    /// Sections in display order
    pub fn sections(&self) -> &[SnapshotSection] {
        &self.sections
    }

    /// Section kinds in display order
    pub fn section_kinds(&self) -> impl Iterator<Item = &SectionKind> {
        self.sections.iter().map(|s| &s.kind)
    }

    /// Items of one section, if present
    pub fn items(&self, kind: &SectionKind) -> Option<&[ItemId]> {
        self.sections
            .iter()
            .find(|s| &s.kind == kind)
            .map(|s| s.items.as_slice())
    }

    /// Whether the snapshot contains the given section
    pub fn contains_section(&self, kind: &SectionKind) -> bool {
        self.sections.iter().any(|s| &s.kind == kind)
    }

    /// Number of sections
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of items across all sections
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<ItemId> {
        raw.iter().map(|s| ItemId::from(*s)).collect()
    }

    #[test]
    fn test_append_sections_and_items() {
        let mut snapshot = Snapshot::new();
        snapshot.append_section(SectionKind::Promoted).unwrap();
        snapshot.append_section(SectionKind::Categories).unwrap();
        snapshot
            .append_items(&SectionKind::Promoted, ids(&["a", "b"]))
            .unwrap();

        assert_eq!(snapshot.section_count(), 2);
        assert_eq!(snapshot.item_count(), 2);
        assert_eq!(
            snapshot.items(&SectionKind::Promoted).unwrap(),
            ids(&["a", "b"]).as_slice()
        );
        assert_eq!(snapshot.items(&SectionKind::Categories).unwrap(), &[]);
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let mut snapshot = Snapshot::new();
        snapshot.append_section(SectionKind::Promoted).unwrap();

        let err = snapshot.append_section(SectionKind::Promoted).unwrap_err();
        assert!(matches!(err, StorefrontError::DuplicateSection(_)));

        // Standard sections collide only per label
        snapshot
            .append_section(SectionKind::standard("Popular this week"))
            .unwrap();
        snapshot
            .append_section(SectionKind::standard("Essential picks"))
            .unwrap();
        let err = snapshot
            .append_section(SectionKind::standard("Popular this week"))
            .unwrap_err();
        assert!(matches!(err, StorefrontError::DuplicateSection(_)));
    }

    #[test]
    fn test_duplicate_item_within_section_rejected() {
        let mut snapshot = Snapshot::new();
        snapshot.append_section(SectionKind::Promoted).unwrap();
        snapshot
            .append_items(&SectionKind::Promoted, ids(&["a"]))
            .unwrap();

        let err = snapshot
            .append_items(&SectionKind::Promoted, ids(&["b", "a"]))
            .unwrap_err();
        assert!(matches!(err, StorefrontError::DuplicateItem(_)));
    }

    #[test]
    fn test_same_id_allowed_across_sections() {
        let mut snapshot = Snapshot::new();
        snapshot.append_section(SectionKind::Promoted).unwrap();
        snapshot.append_section(SectionKind::Categories).unwrap();

        snapshot
            .append_items(&SectionKind::Promoted, ids(&["a"]))
            .unwrap();
        snapshot
            .append_items(&SectionKind::Categories, ids(&["a"]))
            .unwrap();

        assert_eq!(snapshot.item_count(), 2);
    }

    #[test]
    fn test_items_for_unknown_section_rejected() {
        let mut snapshot = Snapshot::new();
        let err = snapshot
            .append_items(&SectionKind::Categories, ids(&["a"]))
            .unwrap_err();
        assert!(matches!(err, StorefrontError::UnknownSection(_)));
    }
}
