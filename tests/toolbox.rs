//! Tests for the toolbox projection and its tooltip filter.
mod common;
use common::catalog_registry;
use kumiki::prelude::*;
use kumiki::toolbox;

#[test]
fn projects_catalog_into_named_categories() {
    let registry = catalog_registry();
    let categories = toolbox::project(&registry, None);

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"Ground Types"));
    assert!(names.contains(&"Send & Receive"));
    // Categories come back sorted for deterministic display.
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    let total: usize = categories.iter().map(|c| c.entries.len()).sum();
    assert_eq!(total, registry.len());
}

#[test]
fn filter_matches_tooltips_case_insensitively() {
    let registry = catalog_registry();
    let lower = toolbox::project(&registry, Some("literal"));
    let upper = toolbox::project(&registry, Some("LITERAL"));
    assert_eq!(lower, upper);
    assert!(!lower.is_empty());
    for category in &lower {
        for entry in &category.entries {
            assert!(entry.tooltip.to_lowercase().contains("literal"));
        }
    }
}

#[test]
fn empty_filter_keeps_everything() {
    let registry = catalog_registry();
    assert_eq!(
        toolbox::project(&registry, Some("")),
        toolbox::project(&registry, None)
    );
}

#[test]
fn projection_tracks_the_registry_snapshot() {
    let mut registry = BlockRegistry::new();
    assert!(toolbox::project(&registry, None).is_empty());

    registry.register(vec![
        BlockDefinition::statement("ping", "Ping the network", "ping", vec![])
            .in_category("Network"),
    ]);
    let categories = toolbox::project(&registry, None);
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Network");
    assert_eq!(categories[0].entries[0].block_type, "ping");
}

#[test]
fn uncategorized_definitions_fall_into_the_default_group() {
    let mut registry = BlockRegistry::new();
    registry.register(vec![BlockDefinition::statement(
        "loose", "No category", "loose", vec![],
    )]);
    let categories = toolbox::project(&registry, None);
    assert_eq!(categories[0].name, toolbox::UNCATEGORIZED);
}
