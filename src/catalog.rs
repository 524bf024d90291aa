//! Catalog data source
//!
//! Read-only, in-memory catalog records backing the browse screen: four
//! ordered collections (promoted, popular, essential apps, plus categories)
//! of records carrying a stable id and either an app or a category payload.
//! The layout and reconciliation code never reads payloads; only the host's
//! cell configuration does.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::StorefrontError;
use crate::section::SectionKind;
use crate::snapshot::{ItemId, Snapshot};

/// App payload of a catalog record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub title: String,
    pub subtitle: String,
    /// Tagline shown on promoted carousel cards
    #[serde(default)]
    pub promoted_headline: Option<String>,
    /// Purchase price; `None` renders as a free app
    #[serde(default)]
    pub price: Option<f64>,
}

impl App {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            promoted_headline: None,
            price: None,
        }
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.promoted_headline = Some(headline.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Price label as rendered on the buy button
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("${:.2}", price),
            None => "GET".to_string(),
        }
    }
}

/// Category payload of a catalog record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Record payload: an app or a category, never both
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    App(App),
    Category(Category),
}

/// One catalog record with its stable identity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub payload: Payload,
}

impl CatalogItem {
    pub fn app(id: impl Into<ItemId>, app: App) -> Self {
        Self {
            id: id.into(),
            payload: Payload::App(app),
        }
    }

    pub fn category(id: impl Into<ItemId>, category: Category) -> Self {
        Self {
            id: id.into(),
            payload: Payload::Category(category),
        }
    }

    /// The app payload, if this record is an app
    pub fn as_app(&self) -> Option<&App> {
        match &self.payload {
            Payload::App(app) => Some(app),
            Payload::Category(_) => None,
        }
    }

    /// The category payload, if this record is a category
    pub fn as_category(&self) -> Option<&Category> {
        match &self.payload {
            Payload::Category(category) => Some(category),
            Payload::App(_) => None,
        }
    }
}

/// Read-only catalog behind the browse screen
pub trait CatalogSource {
    /// Apps featured in the promoted carousel
    fn promoted_apps(&self) -> &[CatalogItem];

    /// Apps on the "Popular this week" shelf
    fn popular_apps(&self) -> &[CatalogItem];

    /// Apps on the "Essential picks" shelf
    fn essential_apps(&self) -> &[CatalogItem];

    /// Category rows
    fn categories(&self) -> &[CatalogItem];

    /// Find a record by id across all four collections
    fn find_by_id(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.promoted_apps()
            .iter()
            .chain(self.popular_apps())
            .chain(self.essential_apps())
            .chain(self.categories())
            .find(|item| &item.id == id)
    }
}

/// Shelf labels of the canonical storefront screen
pub const POPULAR_SHELF: &str = "Popular this week";
pub const ESSENTIAL_SHELF: &str = "Essential picks";

/// Build the canonical storefront snapshot from a catalog
///
/// Section order is fixed: promoted carousel, the two standard shelves,
/// then categories.
pub fn storefront_snapshot(source: &impl CatalogSource) -> Result<Snapshot, StorefrontError> {
    let mut snapshot = Snapshot::new();

    snapshot.append_section(SectionKind::Promoted)?;
    snapshot.append_items(
        &SectionKind::Promoted,
        source.promoted_apps().iter().map(|item| item.id.clone()),
    )?;

    let popular = SectionKind::standard(POPULAR_SHELF);
    let essential = SectionKind::standard(ESSENTIAL_SHELF);
    snapshot.append_section(popular.clone())?;
    snapshot.append_section(essential.clone())?;
    snapshot.append_items(
        &popular,
        source.popular_apps().iter().map(|item| item.id.clone()),
    )?;
    snapshot.append_items(
        &essential,
        source.essential_apps().iter().map(|item| item.id.clone()),
    )?;

    snapshot.append_section(SectionKind::Categories)?;
    snapshot.append_items(
        &SectionKind::Categories,
        source.categories().iter().map(|item| item.id.clone()),
    )?;

    Ok(snapshot)
}

/// In-memory catalog with fixed collections
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    promoted: Vec<CatalogItem>,
    #[serde(default)]
    popular: Vec<CatalogItem>,
    #[serde(default)]
    essential: Vec<CatalogItem>,
    #[serde(default)]
    categories: Vec<CatalogItem>,
}

impl StaticCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with the given collections
    pub fn with_collections(
        promoted: Vec<CatalogItem>,
        popular: Vec<CatalogItem>,
        essential: Vec<CatalogItem>,
        categories: Vec<CatalogItem>,
    ) -> Self {
        Self {
            promoted,
            popular,
            essential,
            categories,
        }
    }

    /// Parse a catalog from JSON
    pub fn from_json_str(json: &str) -> Result<Self, StorefrontError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, StorefrontError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Sample catalog used by the preview binary and tests
    pub fn sample() -> Self {
        Self::with_collections(
            vec![
                CatalogItem::app(
                    "app-halide",
                    App::new("Halide", "Photography")
                        .with_headline("Shoot in raw")
                        .with_price(9.99),
                ),
                CatalogItem::app(
                    "app-wayfarer",
                    App::new("Wayfarer", "Navigation").with_headline("Never get lost again"),
                ),
                CatalogItem::app(
                    "app-tempo",
                    App::new("Tempo", "Music").with_headline("Your practice companion"),
                ),
            ],
            vec![
                CatalogItem::app("app-ledger", App::new("Ledger", "Finance")),
                CatalogItem::app("app-inkwell", App::new("Inkwell", "Productivity").with_price(4.99)),
                CatalogItem::app("app-orbit", App::new("Orbit", "Weather")),
                CatalogItem::app("app-quill", App::new("Quill", "Writing")),
                CatalogItem::app("app-forage", App::new("Forage", "Food & Drink")),
                CatalogItem::app("app-atlas", App::new("Atlas", "Travel").with_price(2.99)),
            ],
            vec![
                CatalogItem::app("app-cipher", App::new("Cipher", "Utilities")),
                CatalogItem::app("app-grove", App::new("Grove", "Health & Fitness")),
                CatalogItem::app("app-beacon", App::new("Beacon", "Social")),
                CatalogItem::app("app-relay", App::new("Relay", "Developer Tools").with_price(14.99)),
                CatalogItem::app("app-prism", App::new("Prism", "Graphics & Design")),
            ],
            vec![
                CatalogItem::category("cat-games", Category::new("Games")),
                CatalogItem::category("cat-productivity", Category::new("Productivity")),
                CatalogItem::category("cat-photo", Category::new("Photo & Video")),
                CatalogItem::category("cat-finance", Category::new("Finance")),
            ],
        )
    }
}

impl CatalogSource for StaticCatalog {
    fn promoted_apps(&self) -> &[CatalogItem] {
        &self.promoted
    }

    fn popular_apps(&self) -> &[CatalogItem] {
        &self.popular
    }

    fn essential_apps(&self) -> &[CatalogItem] {
        &self.essential
    }

    fn categories(&self) -> &[CatalogItem] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloads_mutually_exclusive() {
        let app = CatalogItem::app("a", App::new("Halide", "Photography"));
        assert!(app.as_app().is_some());
        assert!(app.as_category().is_none());

        let category = CatalogItem::category("c", Category::new("Games"));
        assert!(category.as_category().is_some());
        assert!(category.as_app().is_none());
    }

    #[test]
    fn test_find_by_id_across_collections() {
        let catalog = StaticCatalog::sample();

        let promoted = catalog.find_by_id(&ItemId::from("app-halide")).unwrap();
        assert_eq!(promoted.as_app().unwrap().title, "Halide");

        let category = catalog.find_by_id(&ItemId::from("cat-games")).unwrap();
        assert_eq!(category.as_category().unwrap().name, "Games");

        assert!(catalog.find_by_id(&ItemId::from("app-nonexistent")).is_none());
    }

    #[test]
    fn test_price_label() {
        assert_eq!(App::new("a", "b").price_label(), "GET");
        assert_eq!(App::new("a", "b").with_price(4.99).price_label(), "$4.99");
    }

    #[test]
    fn test_storefront_snapshot_order_and_contents() {
        let catalog = StaticCatalog::sample();
        let snapshot = storefront_snapshot(&catalog).unwrap();

        let kinds: Vec<_> = snapshot.section_kinds().cloned().collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Promoted,
                SectionKind::standard(POPULAR_SHELF),
                SectionKind::standard(ESSENTIAL_SHELF),
                SectionKind::Categories,
            ]
        );

        assert_eq!(snapshot.items(&SectionKind::Promoted).unwrap().len(), 3);
        assert_eq!(
            snapshot
                .items(&SectionKind::standard(POPULAR_SHELF))
                .unwrap()
                .len(),
            6
        );
        assert_eq!(snapshot.items(&SectionKind::Categories).unwrap().len(), 4);
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let json = r#"{
            "promoted": [
                {"id": "p1", "payload": {"app": {"title": "Halide", "subtitle": "Photography", "price": 9.99}}}
            ],
            "categories": [
                {"id": "c1", "payload": {"category": {"name": "Games"}}}
            ]
        }"#;

        let catalog = StaticCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.promoted_apps().len(), 1);
        assert_eq!(catalog.popular_apps().len(), 0);
        assert_eq!(
            catalog.promoted_apps()[0].as_app().unwrap().price,
            Some(9.99)
        );
        assert_eq!(catalog.categories()[0].as_category().unwrap().name, "Games");
    }
}
