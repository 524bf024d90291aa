//! Section layout system
//!
//! Declarative geometry for the browse screen: value types in `geometry`,
//! the per-section specification types in `spec`, and the resolver mapping
//! section kinds to specifications in `resolver`.

pub mod geometry;
pub mod resolver;
pub mod spec;

pub use geometry::{Dimension, EdgeInsets, Size};
pub use resolver::{LayoutEnvironment, LayoutResolver};
pub use spec::{
    Axis, DecorationKind, DecorationSpec, Edge, GroupSpec, ItemSpec, LayoutSpec, ScrollBehavior,
};
