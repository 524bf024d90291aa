//! Layout specification types
//!
//! A `LayoutSpec` is a pure description of one section's geometry: how items
//! are sized, how they group, how the section scrolls, and which boundary
//! decorations it carries. The rendering host turns specs into view frames;
//! nothing here touches views.

use super::geometry::{Dimension, EdgeInsets};

/// Stacking axis for a group's items
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// How a section scrolls relative to the primary (vertical) screen axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Section scrolls only with the screen
    #[default]
    None,
    /// Section scrolls sideways on its own, snapping groups to center
    GroupPagingCentered,
}

/// Section boundary a decoration is anchored to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Non-item views anchored to a section boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// Section title label
    Header,
    /// Hairline rule above the section
    TopRule,
    /// Hairline rule below the section
    BottomRule,
}

/// Sizing and placement for one boundary decoration
#[derive(Clone, Debug, PartialEq)]
pub struct DecorationSpec {
    pub kind: DecorationKind,
    pub width: Dimension,
    pub height: Dimension,
    pub edge: Edge,
    pub content_insets: EdgeInsets,
}

/// Sizing for the items inside a group
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSpec {
    pub width: Dimension,
    pub height: Dimension,
    pub content_insets: EdgeInsets,
}

/// One repeating group of items
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSpec {
    /// Axis the group's items stack along
    pub axis: Axis,
    pub width: Dimension,
    pub height: Dimension,
    pub item: ItemSpec,
    /// Items per group; further items start a new group
    pub items_per_group: usize,
}

/// Complete geometric description of one section
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSpec {
    pub group: GroupSpec,
    pub scroll: ScrollBehavior,
    pub decorations: Vec<DecorationSpec>,
    pub content_insets: EdgeInsets,
}

impl LayoutSpec {
    /// Look up a decoration by kind
    pub fn decoration(&self, kind: DecorationKind) -> Option<&DecorationSpec> {
        self.decorations.iter().find(|d| d.kind == kind)
    }

    /// Whether this section declares the given decoration
    pub fn has_decoration(&self, kind: DecorationKind) -> bool {
        self.decoration(kind).is_some()
    }
}
