//! Toolbox projection: a browsable, filterable view of the registered
//! block types, derived fresh from the registry snapshot on every call.

use itertools::Itertools;

use crate::registry::BlockRegistry;

/// Category used for definitions that declare none.
pub const UNCATEGORIZED: &str = "Blocks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolboxEntry {
    pub block_type: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolboxCategory {
    pub name: String,
    pub entries: Vec<ToolboxEntry>,
}

/// Groups the registry's block types by category, keeping only entries
/// whose tooltip contains `filter` (case-insensitive). An empty or
/// absent filter keeps everything. Output ordering is deterministic:
/// categories and entries sort by name.
pub fn project(registry: &BlockRegistry, filter: Option<&str>) -> Vec<ToolboxCategory> {
    let needle = filter.map(str::to_lowercase).filter(|s| !s.is_empty());
    registry
        .definitions()
        .filter(|def| match &needle {
            Some(needle) => def.tooltip.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .map(|def| {
            let category = def
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            let entry = ToolboxEntry {
                block_type: def.block_type.clone(),
                tooltip: def.tooltip.clone(),
            };
            (category, entry)
        })
        .into_group_map()
        .into_iter()
        .map(|(name, mut entries)| {
            entries.sort_by(|a, b| a.block_type.cmp(&b.block_type));
            ToolboxCategory { name, entries }
        })
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect()
}
