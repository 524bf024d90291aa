//! Cell and decoration view seams
//!
//! The host owns no rendering code of its own. Embedders register one view
//! factory per cell kind (and per decoration kind) and the host dequeues
//! through the registry. Registration is checked at dequeue time: asking for
//! an unregistered kind is a programming error and aborts.

use std::collections::HashMap;

use crate::catalog::CatalogItem;
use crate::layout::DecorationKind;
use crate::section::SectionKind;

/// View template kinds, exactly one per section kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    PromotedCell,
    StandardCell,
    CategoryCell,
}

impl CellKind {
    /// The cell template a section's items render with
    pub fn for_section(section: &SectionKind) -> CellKind {
        match section {
            SectionKind::Promoted => CellKind::PromotedCell,
            SectionKind::Standard(_) => CellKind::StandardCell,
            SectionKind::Categories => CellKind::CategoryCell,
        }
    }
}

/// Positional context for one configured cell
///
/// Positions are 1-indexed within the section's rendered item list. The
/// edge-of-list cosmetics derived from them are recomputed on every update,
/// never stored with the data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellContext {
    /// 1-indexed position within the section
    pub position: usize,
    /// Total rendered items in the section
    pub section_len: usize,
    /// Whether this cell hides its bottom separator rule
    pub hide_bottom_rule: bool,
}

/// Whether the cell at `position` (1-indexed) of `section_len` rendered
/// items hides its bottom separator rule
///
/// Standard shelves hide it on every 3rd row so group boundaries read
/// cleanly; the category list hides it on its last row only.
pub fn hides_bottom_rule(
    section: &SectionKind,
    rows_per_group: usize,
    position: usize,
    section_len: usize,
) -> bool {
    match section {
        SectionKind::Promoted => false,
        SectionKind::Standard(_) => rows_per_group > 0 && position % rows_per_group == 0,
        SectionKind::Categories => position == section_len,
    }
}

/// A reusable rendered cell instance
pub trait CellView {
    /// The template this instance was dequeued for
    fn kind(&self) -> CellKind;

    /// Bind a catalog record into this cell
    fn configure(&mut self, item: &CatalogItem, ctx: &CellContext);
}

/// A reusable boundary decoration instance
pub trait DecorationView {
    fn kind(&self) -> DecorationKind;

    /// Set the displayed title; rules ignore it
    fn set_title(&mut self, _title: &str) {}
}

/// Factory function type for creating cell views
pub type CellFactory = fn() -> Box<dyn CellView>;

/// Factory function type for creating decoration views
pub type DecorationFactory = fn() -> Box<dyn DecorationView>;

/// Registry of view factories, keyed by kind
#[derive(Default)]
pub struct ViewRegistry {
    cells: HashMap<CellKind, CellFactory>,
    decorations: HashMap<DecorationKind, DecorationFactory>,
}

impl ViewRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cell factory for one cell kind
    pub fn register_cell(&mut self, kind: CellKind, factory: CellFactory) {
        self.cells.insert(kind, factory);
    }

    /// Register a decoration factory for one decoration kind
    pub fn register_decoration(&mut self, kind: DecorationKind, factory: DecorationFactory) {
        self.decorations.insert(kind, factory);
    }

    /// Whether a cell factory is registered for the given kind
    pub fn has_cell(&self, kind: CellKind) -> bool {
        self.cells.contains_key(&kind)
    }

    /// Create a cell view for the given kind
    ///
    /// Panics if no factory was registered: the mapping from section kinds
    /// to cells is closed, so a missing registration is a wiring defect in
    /// the embedder, not a runtime condition.
    pub fn make_cell(&self, kind: CellKind) -> Box<dyn CellView> {
        let factory = self
            .cells
            .get(&kind)
            .unwrap_or_else(|| panic!("no cell view registered for {:?}", kind));
        factory()
    }

    /// Create a decoration view for the given kind
    ///
    /// Panics if no factory was registered, as with `make_cell`.
    pub fn make_decoration(&self, kind: DecorationKind) -> Box<dyn DecorationView> {
        let factory = self
            .decorations
            .get(&kind)
            .unwrap_or_else(|| panic!("no decoration view registered for {:?}", kind));
        factory()
    }
}
