//! Layout metrics configuration
//!
//! All tuned visual constants of the browse screen live here by name. They
//! are hand-picked values with no derivable relationship, so they are kept
//! as plain configuration rather than computed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::StorefrontError;

/// Tuned layout constants for the browse screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Fraction of the available width each group occupies
    pub group_width_fraction: f32,
    /// Horizontal inset applied to each item edge
    pub item_edge_inset: f32,
    /// Starting height for promoted carousel groups
    pub promoted_estimated_height: f32,
    /// Starting height for standard shelf groups
    pub standard_estimated_height: f32,
    /// Rows stacked in one standard shelf group
    pub standard_rows_per_group: usize,
    /// Starting height for one category row
    pub category_row_height: f32,
    /// Starting height for section headers
    pub header_estimated_height: f32,
    /// Gap above a decorated section
    pub section_top_inset: f32,
    /// Gap below a decorated section
    pub section_bottom_inset: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            group_width_fraction: 0.92,
            item_edge_inset: 4.0,
            promoted_estimated_height: 300.0,
            standard_estimated_height: 250.0,
            standard_rows_per_group: 3,
            category_row_height: 44.0,
            header_estimated_height: 44.0,
            section_top_inset: 8.0,
            section_bottom_inset: 20.0,
        }
    }
}

impl LayoutMetrics {
    /// Find layout.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("storefront").join("layout.toml")),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join("layout.toml"))),
            Some(PathBuf::from("layout.toml")),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Load metrics from file, returning defaults if not found
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_path() {
            Self::load_from_path(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load metrics from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self, StorefrontError> {
        let content = std::fs::read_to_string(path)?;
        let metrics: LayoutMetrics = toml::from_str(&content)?;
        Ok(metrics)
    }
}
