//! Layout resolver - maps section kinds to layout specifications
//!
//! Resolution is a pure function of the section kind, the layout
//! environment, and the configured metrics. The environment changes across
//! invocations (rotation, display changes), so nothing from it is cached.

use crate::config::LayoutMetrics;
use crate::section::SectionKind;

use super::geometry::{Dimension, EdgeInsets};
use super::spec::{
    Axis, DecorationKind, DecorationSpec, Edge, GroupSpec, ItemSpec, LayoutSpec, ScrollBehavior,
};

/// Per-resolution layout inputs
#[derive(Clone, Copy, Debug)]
pub struct LayoutEnvironment {
    /// Content area width at resolution time
    pub available_width: f32,
    /// Pixels per layout unit of the target display
    pub display_scale: f32,
}

impl LayoutEnvironment {
    pub fn new(available_width: f32, display_scale: f32) -> Self {
        Self {
            available_width,
            display_scale,
        }
    }

    /// Height of the thinnest representable line on this display
    pub fn line_unit(&self) -> f32 {
        1.0 / self.display_scale
    }
}

impl Default for LayoutEnvironment {
    fn default() -> Self {
        Self {
            available_width: 390.0,
            display_scale: 2.0,
        }
    }
}

/// Resolves section kinds to layout specifications
#[derive(Clone, Debug, Default)]
pub struct LayoutResolver {
    metrics: LayoutMetrics,
}

impl LayoutResolver {
    /// Create a resolver with default metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with custom metrics
    pub fn with_metrics(metrics: LayoutMetrics) -> Self {
        Self { metrics }
    }

    /// The metrics this resolver was built with
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Resolve the layout specification for one section
    pub fn resolve(&self, section: &SectionKind, env: &LayoutEnvironment) -> LayoutSpec {
        let m = &self.metrics;
        let item_insets = EdgeInsets::horizontal(m.item_edge_inset, m.item_edge_inset);
        let section_insets = EdgeInsets::vertical(m.section_top_inset, m.section_bottom_inset);

        match section {
            SectionKind::Promoted => LayoutSpec {
                group: GroupSpec {
                    axis: Axis::Horizontal,
                    width: Dimension::FractionalWidth(m.group_width_fraction),
                    height: Dimension::Estimated(m.promoted_estimated_height),
                    item: ItemSpec {
                        width: Dimension::FractionalWidth(1.0),
                        // Square relative to the group width
                        height: Dimension::FractionalWidth(1.0),
                        content_insets: item_insets,
                    },
                    items_per_group: 1,
                },
                scroll: ScrollBehavior::GroupPagingCentered,
                decorations: vec![
                    self.rule(DecorationKind::TopRule, Edge::Top, env),
                    self.rule(DecorationKind::BottomRule, Edge::Bottom, env),
                ],
                content_insets: section_insets,
            },

            SectionKind::Standard(_) => LayoutSpec {
                group: GroupSpec {
                    axis: Axis::Vertical,
                    width: Dimension::FractionalWidth(m.group_width_fraction),
                    height: Dimension::Estimated(m.standard_estimated_height),
                    item: ItemSpec {
                        width: Dimension::FractionalWidth(1.0),
                        height: Dimension::FractionalHeight(1.0 / m.standard_rows_per_group as f32),
                        content_insets: item_insets,
                    },
                    items_per_group: m.standard_rows_per_group,
                },
                scroll: ScrollBehavior::GroupPagingCentered,
                decorations: vec![
                    self.header(),
                    self.rule(DecorationKind::BottomRule, Edge::Bottom, env),
                ],
                content_insets: section_insets,
            },

            SectionKind::Categories => {
                // The group spans only a fraction of the screen, so each row
                // adds half the leftover width per side to center itself
                // within the full available width.
                let group_width = env.available_width * m.group_width_fraction;
                let half_remainder = (env.available_width - group_width) / 2.0;
                let row_inset = m.item_edge_inset + half_remainder;

                LayoutSpec {
                    group: GroupSpec {
                        axis: Axis::Vertical,
                        width: Dimension::FractionalWidth(m.group_width_fraction),
                        height: Dimension::Estimated(m.category_row_height),
                        item: ItemSpec {
                            width: Dimension::FractionalWidth(1.0),
                            height: Dimension::FractionalHeight(1.0),
                            content_insets: EdgeInsets::horizontal(row_inset, row_inset),
                        },
                        items_per_group: 1,
                    },
                    scroll: ScrollBehavior::None,
                    decorations: Vec::new(),
                    content_insets: EdgeInsets::ZERO,
                }
            }
        }
    }

    fn header(&self) -> DecorationSpec {
        let m = &self.metrics;
        DecorationSpec {
            kind: DecorationKind::Header,
            width: Dimension::FractionalWidth(m.group_width_fraction),
            height: Dimension::Estimated(m.header_estimated_height),
            edge: Edge::Top,
            content_insets: EdgeInsets::horizontal(m.item_edge_inset, m.item_edge_inset),
        }
    }

    fn rule(&self, kind: DecorationKind, edge: Edge, env: &LayoutEnvironment) -> DecorationSpec {
        let m = &self.metrics;
        DecorationSpec {
            kind,
            width: Dimension::FractionalWidth(m.group_width_fraction),
            height: Dimension::Absolute(env.line_unit()),
            edge,
            content_insets: EdgeInsets::horizontal(m.item_edge_inset, m.item_edge_inset),
        }
    }
}
