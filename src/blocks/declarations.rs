//! Declarations: new, let, contracts and bundles.

use crate::block::{ArgSlot, BlockDefinition};
use crate::generator::Order;

fn bundle(block_type: &str, tooltip: &str, keyword: &str) -> BlockDefinition {
    BlockDefinition::statement(
        block_type,
        tooltip,
        &format!("{keyword} {{\n%1}}"),
        vec![ArgSlot::statement("BODY")],
    )
}

pub fn definitions() -> Vec<BlockDefinition> {
    let defs = vec![
        BlockDefinition::statement(
            "proc_new",
            "Declare new names: new x in { }",
            "new %1 in {\n%2}",
            vec![
                ArgSlot::value("NAMES", "NameDecl", Order::None),
                ArgSlot::statement("BODY"),
            ],
        ),
        BlockDefinition::expression(
            "name_decl_list",
            "Comma-separated name declarations",
            "%1, %2",
            "NameDecl",
            Order::None,
            vec![
                ArgSlot::value("ITEM", "NameDecl", Order::None),
                ArgSlot::value("NEXT", "NameDecl", Order::None),
            ],
        ),
        BlockDefinition::statement(
            "proc_let",
            "Let declarations: let d in { }",
            "let %1 in {\n%2}",
            vec![
                ArgSlot::value("DECLS", "Decl", Order::None),
                ArgSlot::statement("BODY"),
            ],
        ),
        BlockDefinition::expression(
            "decl",
            "A single let declaration",
            "%1 <- %2",
            "Decl",
            Order::None,
            vec![
                ArgSlot::value_any("NAMES", Order::None),
                ArgSlot::value_any("PROCS", Order::None),
            ],
        ),
        BlockDefinition::expression(
            "linear_decls",
            "Sequential declarations joined with ;",
            "%1; %2",
            "Decl",
            Order::None,
            vec![
                ArgSlot::value("LEFT", "Decl", Order::None),
                ArgSlot::value("RIGHT", "Decl", Order::None),
            ],
        ),
        BlockDefinition::expression(
            "conc_decls",
            "Concurrent declarations joined with &",
            "%1 & %2",
            "Decl",
            Order::None,
            vec![
                ArgSlot::value("LEFT", "Decl", Order::None),
                ArgSlot::value("RIGHT", "Decl", Order::None),
            ],
        ),
        BlockDefinition::statement(
            "proc_contract",
            "Contract declaration",
            "contract %1(%2) = {\n%3}",
            vec![
                ArgSlot::value("NAME", "Name", Order::None),
                ArgSlot::value("PARAMS", "Name", Order::None),
                ArgSlot::statement("BODY"),
            ],
        ),
        BlockDefinition::statement(
            "proc_contract_remainder",
            "Contract with a parameter remainder",
            "contract %1(%2...@%3) = {\n%4}",
            vec![
                ArgSlot::value("NAME", "Name", Order::None),
                ArgSlot::value("PARAMS", "Name", Order::None),
                ArgSlot::text("REMAINDER", "rest"),
                ArgSlot::statement("BODY"),
            ],
        ),
        bundle("proc_bundle_write", "Write-only bundle", "bundle+"),
        bundle("proc_bundle_read", "Read-only bundle", "bundle-"),
        bundle("proc_bundle_equiv", "Equivalence bundle", "bundle0"),
        bundle("proc_bundle_rw", "Read-write bundle", "bundle"),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Declarations"))
        .collect()
}
