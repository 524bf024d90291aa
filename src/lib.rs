//! Storefront - sectioned browse-screen layout and reconciliation
//!
//! Two cooperating pure components over a small catalog model:
//! - `layout`: maps section kinds to declarative layout specifications
//! - `reconciler`: diffs identity snapshots so the host can reuse view
//!   slots instead of rebuilding them
//!
//! The `host` module binds the two to reusable view instances behind
//! trait seams; the preview binary in main.rs renders the result as text.

// Include the log module first so the log! macro works everywhere
#[macro_use]
pub mod log;

pub mod catalog;
pub mod config;
pub mod errors;
pub mod host;
pub mod layout;
pub mod reconciler;
pub mod section;
pub mod snapshot;

pub use catalog::{
    storefront_snapshot, App, CatalogItem, CatalogSource, Category, Payload, StaticCatalog,
    ESSENTIAL_SHELF, POPULAR_SHELF,
};
pub use config::LayoutMetrics;
pub use errors::StorefrontError;
pub use host::{CellContext, CellKind, CellView, DecorationView, SectionHost, ViewRegistry};
pub use layout::{
    Axis, DecorationKind, DecorationSpec, Dimension, Edge, EdgeInsets, GroupSpec, ItemSpec,
    LayoutEnvironment, LayoutResolver, LayoutSpec, ScrollBehavior, Size,
};
pub use reconciler::{diff_snapshots, Reconciler, SectionDiff, SnapshotDiff};
pub use section::SectionKind;
pub use snapshot::{ItemId, Snapshot, SnapshotSection};
