//! Names: variables, quoting, declarations and name lists.

use crate::block::{ArgSlot, BlockDefinition};
use crate::generator::Order;

pub fn definitions() -> Vec<BlockDefinition> {
    let defs = vec![
        BlockDefinition::expression(
            "name_wildcard",
            "Wildcard name",
            "_",
            "Name",
            Order::Atomic,
            vec![],
        ),
        BlockDefinition::expression(
            "name_var",
            "Name variable",
            "%1",
            "Name",
            Order::Atomic,
            vec![ArgSlot::text("VAR", "x")],
        ),
        // Quotes a process into a name: @P.
        BlockDefinition::expression(
            "name_quote",
            "Quoted process: @P",
            "@%1",
            "Name",
            Order::Unary,
            vec![ArgSlot::value("PROC", "Proc", Order::Unary)],
        ),
        BlockDefinition::expression(
            "name_decl_simple",
            "Simple name declaration",
            "%1",
            "NameDecl",
            Order::Atomic,
            vec![ArgSlot::text("VAR", "x")],
        ),
        BlockDefinition::expression(
            "name_decl_urn",
            "Name declaration bound to a URN",
            "%1(`%2`)",
            "NameDecl",
            Order::Atomic,
            vec![ArgSlot::text("VAR", "x"), ArgSlot::text("URN", "")],
        ),
        BlockDefinition::expression(
            "name_remainder",
            "Name remainder: ...@x",
            "...@%1",
            "Name",
            Order::Atomic,
            vec![ArgSlot::text("VAR", "x")],
        ),
        BlockDefinition::expression(
            "name_list",
            "Comma-separated name list",
            "%1, %2",
            "Name",
            Order::None,
            vec![
                ArgSlot::value("ITEM", "Name", Order::None),
                ArgSlot::value("NEXT", "Name", Order::None),
            ],
        ),
    ];
    defs.into_iter().map(|d| d.in_category("Names")).collect()
}
