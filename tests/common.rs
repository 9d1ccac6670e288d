//! Common test utilities for building registries and block instances.
use kumiki::prelude::*;

/// A registry loaded with the whole built-in Rholang catalog.
#[allow(dead_code)]
pub fn catalog_registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    registry.register(kumiki::blocks::all());
    registry
}

/// An integer literal block.
#[allow(dead_code)]
pub fn int(value: f64) -> BlockInstance {
    BlockInstance::new("ground_int").with_field("VALUE", value)
}

/// A string literal block.
#[allow(dead_code)]
pub fn string(value: &str) -> BlockInstance {
    BlockInstance::new("ground_string").with_field("VALUE", value)
}

/// A process variable block.
#[allow(dead_code)]
pub fn var(name: &str) -> BlockInstance {
    BlockInstance::new("proc_var").with_field("VAR", name)
}

/// A name variable block.
#[allow(dead_code)]
pub fn name(value: &str) -> BlockInstance {
    BlockInstance::new("name_var").with_field("VAR", value)
}

/// A `ch!(arg)` send block.
#[allow(dead_code)]
pub fn send(channel: &str, arg: BlockInstance) -> BlockInstance {
    BlockInstance::new("proc_send")
        .with_input("CHANNEL", name(channel))
        .with_input("ARGS", arg)
}

/// Generates a single root against the catalog registry.
#[allow(dead_code)]
pub fn generate(root: BlockInstance) -> Result<String> {
    let registry = catalog_registry();
    let workspace = Workspace::new().with_block(root);
    Ok(Generator::new(&registry).workspace_to_code(&workspace)?)
}
