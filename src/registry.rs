use ahash::AHashMap;

use crate::block::{BlockDefinition, raw::parse_definitions};
use crate::error::LoadError;

/// Keyed store of block definitions driving code generation.
///
/// Registries are plain values handed to whoever needs one; there is no
/// module-level singleton, so independent generator instances never
/// share state.
#[derive(Debug, Default, Clone)]
pub struct BlockRegistry {
    definitions: AHashMap<String, BlockDefinition>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or overwrites definitions keyed by block type. Entries
    /// without a type or template are silently skipped; registration is
    /// tolerant of malformed input. Returns how many were registered.
    pub fn register(&mut self, definitions: impl IntoIterator<Item = BlockDefinition>) -> usize {
        let mut registered = 0;
        for def in definitions {
            if !def.is_registrable() {
                continue;
            }
            self.definitions.insert(def.block_type.clone(), def);
            registered += 1;
        }
        registered
    }

    /// Parses a Blockly-style definitions JSON array and registers every
    /// convertible entry. Invalid JSON is an error; individually
    /// malformed entries are skipped like any other.
    pub fn register_json(&mut self, json: &str) -> Result<usize, LoadError> {
        let raws = parse_definitions(json)?;
        Ok(self.register(raws.into_iter().filter_map(|r| r.into_definition())))
    }

    pub fn lookup(&self, block_type: &str) -> Option<&BlockDefinition> {
        self.definitions.get(block_type)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterates the current snapshot, in no particular order.
    pub fn definitions(&self) -> impl Iterator<Item = &BlockDefinition> {
        self.definitions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockDefinition;
    use crate::generator::Order;

    #[test]
    fn register_skips_malformed_entries() {
        let mut registry = BlockRegistry::new();
        let registered = registry.register(vec![
            BlockDefinition::expression("ok", "fine", "Nil", "Proc", Order::Atomic, vec![]),
            BlockDefinition::expression("", "no type", "x", "Proc", Order::Atomic, vec![]),
            BlockDefinition::statement("no_template", "empty", "", vec![]),
        ]);
        assert_eq!(registered, 1);
        assert!(registry.lookup("ok").is_some());
        assert!(registry.lookup("no_template").is_none());
    }

    #[test]
    fn register_overwrites_by_type() {
        let mut registry = BlockRegistry::new();
        registry.register(vec![BlockDefinition::expression(
            "a", "first", "1", "Proc", Order::Atomic, vec![],
        )]);
        registry.register(vec![BlockDefinition::expression(
            "a", "second", "2", "Proc", Order::Atomic, vec![],
        )]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("a").unwrap().template, "2");
    }
}
