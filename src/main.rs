//! Storefront preview - renders the browse screen as text
//!
//! Usage: storefront [width] [display-scale] [catalog.json]
//!
//! Builds the canonical storefront snapshot from the sample catalog (or a
//! JSON catalog file), runs it through the reconciler and slot table, and
//! prints each section's resolved geometry and rows.

use std::path::PathBuf;

use storefront::catalog::{storefront_snapshot, CatalogItem, CatalogSource, StaticCatalog};
use storefront::host::{CellContext, CellKind, CellView, DecorationView, SectionHost, ViewRegistry};
use storefront::layout::{
    DecorationKind, Dimension, LayoutEnvironment, LayoutResolver, ScrollBehavior, Size,
};
use storefront::log;
use storefront::snapshot::SnapshotSection;
use storefront::LayoutMetrics;

/// Cell that traces configuration into the log file
struct TracingCell(CellKind);

impl CellView for TracingCell {
    fn kind(&self) -> CellKind {
        self.0
    }

    fn configure(&mut self, item: &CatalogItem, ctx: &CellContext) {
        log!(
            "configure {:?} for {} ({}/{}, rule hidden: {})",
            self.0,
            item.id,
            ctx.position,
            ctx.section_len,
            ctx.hide_bottom_rule
        );
    }
}

/// Decoration that traces title updates into the log file
struct TracingDecoration(DecorationKind);

impl DecorationView for TracingDecoration {
    fn kind(&self) -> DecorationKind {
        self.0
    }

    fn set_title(&mut self, title: &str) {
        log!("header title set: {}", title);
    }
}

fn registry() -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    registry.register_cell(CellKind::PromotedCell, || {
        Box::new(TracingCell(CellKind::PromotedCell))
    });
    registry.register_cell(CellKind::StandardCell, || {
        Box::new(TracingCell(CellKind::StandardCell))
    });
    registry.register_cell(CellKind::CategoryCell, || {
        Box::new(TracingCell(CellKind::CategoryCell))
    });
    registry.register_decoration(DecorationKind::Header, || {
        Box::new(TracingDecoration(DecorationKind::Header))
    });
    registry.register_decoration(DecorationKind::TopRule, || {
        Box::new(TracingDecoration(DecorationKind::TopRule))
    });
    registry.register_decoration(DecorationKind::BottomRule, || {
        Box::new(TracingDecoration(DecorationKind::BottomRule))
    });
    registry
}

fn item_line(record: &CatalogItem) -> String {
    match record.as_app() {
        Some(app) => {
            let headline = app
                .promoted_headline
                .as_deref()
                .map(|h| format!(" - {}", h))
                .unwrap_or_default();
            format!(
                "{}{} ({})  [{}]",
                app.title,
                headline,
                app.subtitle,
                app.price_label()
            )
        }
        None => match record.as_category() {
            Some(category) => category.name.clone(),
            None => String::new(),
        },
    }
}

fn print_section(
    host: &mut SectionHost,
    section: &SnapshotSection,
    source: &dyn CatalogSource,
    env: &LayoutEnvironment,
) {
    let resolver: &LayoutResolver = host.resolver();
    let spec = resolver.resolve(&section.kind, env);
    let rows_per_group = resolver.metrics().standard_rows_per_group;

    let container = Size::new(env.available_width, 0.0);
    let group_width = spec.group.width.resolve(container);
    let group_height = match spec.group.height {
        Dimension::Estimated(units) => format!("~{}", units),
        other => format!("{}", other.resolve(container)),
    };
    let paging = match spec.scroll {
        ScrollBehavior::GroupPagingCentered => "paged",
        ScrollBehavior::None => "static",
    };

    if spec.has_decoration(DecorationKind::TopRule)
        && host
            .decoration_view(&section.kind, DecorationKind::TopRule)
            .is_some()
    {
        println!("  {}", "─".repeat(40));
    }

    if spec.has_decoration(DecorationKind::Header)
        && host
            .decoration_view(&section.kind, DecorationKind::Header)
            .is_some()
    {
        println!("  ## {}", section.kind.title());
    }

    println!(
        "  [{} · {} · group {:.1}x{} · {} per group]",
        section.kind, paging, group_width, group_height, spec.group.items_per_group
    );

    let section_len = section.items.len();
    for (index, id) in section.items.iter().enumerate() {
        let Some(record) = source.find_by_id(id) else {
            continue;
        };
        println!("    {}", item_line(record));

        let position = index + 1;
        let hide = storefront::host::hides_bottom_rule(
            &section.kind,
            rows_per_group,
            position,
            section_len,
        );
        if !hide && position < section_len {
            println!("    {}", "┈".repeat(36));
        }
    }

    if spec.has_decoration(DecorationKind::BottomRule)
        && host
            .decoration_view(&section.kind, DecorationKind::BottomRule)
            .is_some()
    {
        println!("  {}", "─".repeat(40));
    }
    println!();
}

fn main() {
    log::init();
    log!("preview starting");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let width: f32 = args
        .first()
        .and_then(|a| a.parse().ok())
        .unwrap_or(390.0);
    let scale: f32 = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(2.0);
    let catalog = match args.get(2) {
        Some(path) => match StaticCatalog::load(&PathBuf::from(path)) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!("failed to load catalog from {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => StaticCatalog::sample(),
    };

    let metrics = LayoutMetrics::load();
    log!("metrics: {:?}", metrics);

    let env = LayoutEnvironment::new(width, scale);
    let resolver = LayoutResolver::with_metrics(metrics);
    let mut host = SectionHost::with_resolver(registry(), resolver);

    let snapshot = match storefront_snapshot(&catalog) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("failed to build snapshot: {}", err);
            std::process::exit(1);
        }
    };

    let diff = host.update(snapshot, &catalog);
    log!(
        "applied snapshot: {} sections, {} items inserted",
        diff.inserted_sections.len(),
        diff.inserted_count()
    );

    println!("═══ Storefront preview (width {}, scale {}x) ═══", width, scale);
    println!();

    let sections: Vec<SnapshotSection> = host.snapshot().sections().to_vec();
    for section in &sections {
        print_section(&mut host, section, &catalog, &env);
    }

    // Reapplying the same data is structure-free: every slot is retained
    if let Ok(snapshot) = storefront_snapshot(&catalog) {
        let diff = host.update(snapshot, &catalog);
        log!(
            "reapplied identical snapshot: {} retained, diff empty: {}",
            diff.retained_count(),
            diff.is_empty()
        );
    }
}
