//! Rendering host
//!
//! Toolkit-free glue between the identity snapshot and actual view
//! instances: cell/decoration seams and the slot table that keeps them
//! bound across snapshot updates. The pixel pipeline behind the views stays
//! outside this crate.

pub mod binder;
pub mod cells;

pub use binder::SectionHost;
pub use cells::{
    hides_bottom_rule, CellContext, CellFactory, CellKind, CellView, DecorationFactory,
    DecorationView, ViewRegistry,
};
