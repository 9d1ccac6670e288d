//! Control flow: conditionals, match and select.

use crate::block::{ArgSlot, BlockDefinition};
use crate::generator::Order;

pub fn definitions() -> Vec<BlockDefinition> {
    let defs = vec![
        BlockDefinition::statement(
            "proc_if",
            "Conditional without else branch",
            "if (%1) {\n%2}",
            vec![
                ArgSlot::value_any("CONDITION", Order::None),
                ArgSlot::statement("BODY"),
            ],
        ),
        BlockDefinition::statement(
            "proc_if_else",
            "Conditional with else branch",
            "if (%1) {\n%2} else {\n%3}",
            vec![
                ArgSlot::value_any("CONDITION", Order::None),
                ArgSlot::statement("THEN_BODY"),
                ArgSlot::statement("ELSE_BODY"),
            ],
        ),
        BlockDefinition::statement(
            "proc_match",
            "Pattern match over an expression",
            "match %1 {\n%2}",
            vec![
                ArgSlot::value_any("EXPR", Order::None),
                ArgSlot::statement("CASES"),
            ],
        ),
        BlockDefinition::statement(
            "case",
            "A match case arm",
            "%1 => {\n%2}",
            vec![
                ArgSlot::value_any("PATTERN", Order::None),
                ArgSlot::statement("BODY"),
            ],
        ),
        BlockDefinition::statement(
            "proc_select",
            "Select over concurrent branches",
            "select {\n%1}",
            vec![ArgSlot::statement("BRANCHES")],
        ),
        BlockDefinition::statement(
            "branch",
            "A select branch arm",
            "%1 => {\n%2}",
            vec![
                ArgSlot::value("RECEIPT", "Bind", Order::None),
                ArgSlot::statement("BODY"),
            ],
        ),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Control Flow"))
        .collect()
}
