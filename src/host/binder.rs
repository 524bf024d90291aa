//! Slot table binding item identities to live view instances
//!
//! The host owns the mapping from (section, item id) to dequeued cell
//! views. On every snapshot update it drops slots whose identity vanished,
//! dequeues fresh views for inserted identities, keeps retained slots bound
//! to their instances, and reconfigures every rendered item so positional
//! cosmetics stay correct after any count change.

use std::collections::HashMap;

use crate::catalog::CatalogSource;
use crate::layout::{DecorationKind, LayoutEnvironment, LayoutResolver, LayoutSpec};
use crate::reconciler::{Reconciler, SnapshotDiff};
use crate::section::SectionKind;
use crate::snapshot::{ItemId, Snapshot, SnapshotSection};

use super::cells::{
    hides_bottom_rule, CellContext, CellKind, CellView, DecorationView, ViewRegistry,
};

/// A live view slot bound to one item identity
struct Slot {
    view: Box<dyn CellView>,
    /// Monotonic dequeue stamp; retained identities keep theirs
    id: u64,
}

/// Binds snapshots to view slots and serves per-section layout
pub struct SectionHost {
    registry: ViewRegistry,
    resolver: LayoutResolver,
    reconciler: Reconciler,
    slots: HashMap<(SectionKind, ItemId), Slot>,
    decorations: HashMap<(SectionKind, DecorationKind), Box<dyn DecorationView>>,
    next_slot_id: u64,
}

impl SectionHost {
    /// Create a host with the given view registry and a default resolver
    pub fn new(registry: ViewRegistry) -> Self {
        Self::with_resolver(registry, LayoutResolver::new())
    }

    /// Create a host with a custom resolver
    pub fn with_resolver(registry: ViewRegistry, resolver: LayoutResolver) -> Self {
        Self {
            registry,
            resolver,
            reconciler: Reconciler::new(),
            slots: HashMap::new(),
            decorations: HashMap::new(),
            next_slot_id: 0,
        }
    }

    /// The resolver used for per-section layout
    pub fn resolver(&self) -> &LayoutResolver {
        &self.resolver
    }

    /// The currently rendered snapshot
    pub fn snapshot(&self) -> &Snapshot {
        self.reconciler.current()
    }

    /// Section kind at the given display index
    pub fn section_at(&self, index: usize) -> Option<&SectionKind> {
        self.snapshot().sections().get(index).map(|s| &s.kind)
    }

    /// Resolve the layout for the section at the given display index
    pub fn resolve_layout(&self, index: usize, env: &LayoutEnvironment) -> Option<LayoutSpec> {
        self.section_at(index)
            .map(|kind| self.resolver.resolve(kind, env))
    }

    /// Number of live view slots
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Dequeue stamp of the slot bound to an identity, if rendered
    pub fn slot_id(&self, section: &SectionKind, item: &ItemId) -> Option<u64> {
        self.slots
            .get(&(section.clone(), item.clone()))
            .map(|slot| slot.id)
    }

    /// Apply a new snapshot: reconcile identities, rebuild slots, and
    /// reconfigure every rendered item against the catalog
    pub fn update(&mut self, next: Snapshot, source: &dyn CatalogSource) -> SnapshotDiff {
        let diff = self.reconciler.apply(next);

        for kind in &diff.removed_sections {
            self.slots.retain(|(section, _), _| section != kind);
            self.decorations.retain(|(section, _), _| section != kind);
        }

        for section_diff in &diff.sections {
            for id in &section_diff.removed {
                self.slots
                    .remove(&(section_diff.kind.clone(), id.clone()));
            }
            let cell_kind = CellKind::for_section(&section_diff.kind);
            for id in &section_diff.inserted {
                let slot = Slot {
                    view: self.registry.make_cell(cell_kind),
                    id: self.next_slot_id,
                };
                self.next_slot_id += 1;
                self.slots
                    .insert((section_diff.kind.clone(), id.clone()), slot);
            }
        }

        self.reconfigure(source);
        diff
    }

    /// Reconfigure every rendered item from the catalog
    ///
    /// Positions are recomputed from the current snapshot, so edge-of-list
    /// cosmetics are always derived from the rendered list, never cached.
    pub fn reconfigure(&mut self, source: &dyn CatalogSource) {
        let sections: Vec<SnapshotSection> = self.snapshot().sections().to_vec();
        let rows_per_group = self.resolver.metrics().standard_rows_per_group;

        for section in sections {
            let section_len = section.items.len();
            for (index, id) in section.items.iter().enumerate() {
                let Some(record) = source.find_by_id(id) else {
                    // A record can legitimately be missing mid-transition;
                    // leave the slot unconfigured rather than failing.
                    log!("no catalog record for {}, skipping slot", id);
                    continue;
                };

                let position = index + 1;
                let ctx = CellContext {
                    position,
                    section_len,
                    hide_bottom_rule: hides_bottom_rule(
                        &section.kind,
                        rows_per_group,
                        position,
                        section_len,
                    ),
                };

                if let Some(slot) = self.slots.get_mut(&(section.kind.clone(), id.clone())) {
                    slot.view.configure(record, &ctx);
                }
            }
        }
    }

    /// Serve the decoration view for a section boundary, creating or
    /// reusing the instance
    ///
    /// Promoted sections never get a header view, whatever their resolved
    /// decoration list says; headers carry the section title.
    pub fn decoration_view(
        &mut self,
        section: &SectionKind,
        kind: DecorationKind,
    ) -> Option<&mut dyn DecorationView> {
        if kind == DecorationKind::Header && !section.shows_header() {
            return None;
        }

        let key = (section.clone(), kind);
        let registry = &self.registry;
        let view = self
            .decorations
            .entry(key)
            .or_insert_with(|| registry.make_decoration(kind));
        if kind == DecorationKind::Header {
            view.set_title(section.title());
        }
        Some(&mut **view)
    }
}
