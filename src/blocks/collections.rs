//! Collections: lists, tuples, sets and maps, with their remainder
//! forms and the comma-chain helper blocks that feed them.

use crate::block::{ArgSlot, BlockDefinition};
use crate::generator::Order;

pub fn definitions() -> Vec<BlockDefinition> {
    let defs = vec![
        BlockDefinition::expression(
            "collect_list",
            "List collection: [a, b]",
            "[%1]",
            "Collection",
            Order::Atomic,
            vec![ArgSlot::value_any("ELEMENTS", Order::None)],
        ),
        BlockDefinition::expression(
            "collect_list_remainder",
            "List with remainder: [a, b...rest]",
            "[%1%2]",
            "Collection",
            Order::Atomic,
            vec![
                ArgSlot::value_any("ELEMENTS", Order::None),
                ArgSlot::value("REMAINDER", "Remainder", Order::None),
            ],
        ),
        BlockDefinition::expression(
            "tuple_single",
            "Single-element tuple: (a,)",
            "(%1,)",
            "Collection",
            Order::Atomic,
            vec![ArgSlot::value_any("ELEMENT", Order::None)],
        ),
        BlockDefinition::expression(
            "tuple_multiple",
            "Tuple: (a, b)",
            "(%1, %2)",
            "Collection",
            Order::Atomic,
            vec![
                ArgSlot::value_any("FIRST", Order::None),
                ArgSlot::value_any("REST", Order::None),
            ],
        ),
        BlockDefinition::expression(
            "collect_set",
            "Set collection: Set(a, b)",
            "Set(%1)",
            "Collection",
            Order::Atomic,
            vec![ArgSlot::value_any("ELEMENTS", Order::None)],
        ),
        BlockDefinition::expression(
            "collect_set_remainder",
            "Set with remainder: Set(a, b...rest)",
            "Set(%1%2)",
            "Collection",
            Order::Atomic,
            vec![
                ArgSlot::value_any("ELEMENTS", Order::None),
                ArgSlot::value("REMAINDER", "Remainder", Order::None),
            ],
        ),
        // Map pairs chain through key_value_pair / proc_list values, so
        // statement stacking keeps its single parallel meaning.
        BlockDefinition::expression(
            "collect_map",
            "Map collection: {k: v}",
            "{%1}",
            "Collection",
            Order::Atomic,
            vec![ArgSlot::value_any("PAIRS", Order::None)],
        ),
        BlockDefinition::expression(
            "collect_map_remainder",
            "Map with remainder: {k: v...rest}",
            "{%1%2}",
            "Collection",
            Order::Atomic,
            vec![
                ArgSlot::value_any("PAIRS", Order::None),
                ArgSlot::value("REMAINDER", "Remainder", Order::None),
            ],
        ),
        BlockDefinition::expression(
            "key_value_pair",
            "Key/value pair for maps",
            "%1: %2",
            "Pair",
            Order::None,
            vec![
                ArgSlot::value_any("KEY", Order::None),
                ArgSlot::value_any("VALUE", Order::None),
            ],
        ),
        BlockDefinition::expression(
            "proc_list",
            "Comma-separated process list",
            "%1, %2",
            "Proc",
            Order::None,
            vec![
                ArgSlot::value_any("ITEM", Order::None),
                ArgSlot::value_any("NEXT", Order::None),
            ],
        ),
        BlockDefinition::expression(
            "proc_remainder",
            "Process remainder: ...x",
            "...%1",
            "Remainder",
            Order::Atomic,
            vec![ArgSlot::text("VAR", "x")],
        ),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Collections"))
        .collect()
}
