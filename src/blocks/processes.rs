//! Process constructs: basic processes, operators, method calls, the
//! send/receive family and explicit parallel composition.

use crate::block::{ArgSlot, BlockDefinition};
use crate::generator::Order;

/// A left-associative binary operator block: the left operand is
/// demanded at the operator's own level, the right one level tighter,
/// so an equal-precedence right child keeps its parentheses.
fn binary(block_type: &str, tooltip: &str, template: &str, level: Order) -> BlockDefinition {
    BlockDefinition::expression(
        block_type,
        tooltip,
        template,
        "Proc",
        level,
        vec![
            ArgSlot::value("LEFT", "Proc", level),
            ArgSlot::value("RIGHT", "Proc", level.tighter()),
        ],
    )
}

fn unary(block_type: &str, tooltip: &str, template: &str) -> BlockDefinition {
    BlockDefinition::expression(
        block_type,
        tooltip,
        template,
        "Proc",
        Order::Unary,
        vec![ArgSlot::value("PROC", "Proc", Order::Unary)],
    )
}

fn send(block_type: &str, tooltip: &str, template: &str) -> BlockDefinition {
    BlockDefinition::statement(
        block_type,
        tooltip,
        template,
        vec![
            ArgSlot::value("CHANNEL", "Name", Order::None),
            ArgSlot::value_any("ARGS", Order::None),
        ],
    )
}

fn basic() -> Vec<BlockDefinition> {
    let defs = vec![
        BlockDefinition::expression("proc_nil", "Nil process", "Nil", "Proc", Order::Atomic, vec![]),
        BlockDefinition::expression(
            "proc_ground",
            "Ground value as process",
            "%1",
            "Proc",
            Order::Atomic,
            vec![ArgSlot::value("VALUE", "Ground", Order::None)],
        ),
        BlockDefinition::expression(
            "proc_collect",
            "Collection as process",
            "%1",
            "Proc",
            Order::Atomic,
            vec![ArgSlot::value("VALUE", "Collection", Order::None)],
        ),
        BlockDefinition::expression(
            "proc_var",
            "Process variable",
            "%1",
            "Proc",
            Order::Atomic,
            vec![ArgSlot::text("VAR", "x")],
        ),
        BlockDefinition::expression(
            "proc_var_wildcard",
            "Wildcard process variable",
            "_",
            "Proc",
            Order::Atomic,
            vec![],
        ),
        BlockDefinition::expression(
            "proc_var_ref",
            "Variable reference: =x",
            "=%1",
            "Proc",
            Order::Unary,
            vec![ArgSlot::text("VAR", "x")],
        ),
        BlockDefinition::expression(
            "proc_var_ref_name",
            "Name variable reference: =*x",
            "=*%1",
            "Proc",
            Order::Unary,
            vec![ArgSlot::text("VAR", "x")],
        ),
        BlockDefinition::expression(
            "proc_simple_type",
            "Simple type as process",
            "%1",
            "Proc",
            Order::Atomic,
            vec![ArgSlot::value("TYPE", "SimpleType", Order::None)],
        ),
        BlockDefinition::expression(
            "proc_eval",
            "Evaluate a name: *n",
            "*%1",
            "Proc",
            Order::Unary,
            vec![ArgSlot::value("NAME", "Name", Order::Unary)],
        ),
        BlockDefinition::expression(
            "proc_paren",
            "Parenthesized expression",
            "(%1)",
            "Proc",
            Order::Atomic,
            vec![ArgSlot::value_any("EXPR", Order::None)],
        ),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Basic Processes"))
        .collect()
}

fn logical() -> Vec<BlockDefinition> {
    let defs = vec![
        unary("proc_negation", "Logical negation: ~P", "~%1"),
        binary(
            "proc_conjunction",
            "Pattern conjunction: P /\\ Q",
            "%1 /\\ %2",
            Order::LogicalAnd,
        ),
        binary(
            "proc_disjunction",
            "Pattern disjunction: P \\/ Q",
            "%1 \\/ %2",
            Order::LogicalOr,
        ),
        unary("proc_not", "Boolean not", "not %1"),
        binary("proc_and", "Boolean and", "%1 and %2", Order::LogicalAnd),
        binary("proc_or", "Boolean or", "%1 or %2", Order::LogicalOr),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Logical Operations"))
        .collect()
}

fn arithmetic() -> Vec<BlockDefinition> {
    let defs = vec![
        unary("proc_neg", "Arithmetic negation", "-%1"),
        binary(
            "proc_mult",
            "Multiplication",
            "%1 * %2",
            Order::Multiplicative,
        ),
        binary("proc_div", "Division", "%1 / %2", Order::Multiplicative),
        binary("proc_mod", "Modulo", "%1 %% %2", Order::Multiplicative),
        binary(
            "proc_percent_percent",
            "String interpolation: a %% b",
            "%1 %%%% %2",
            Order::Multiplicative,
        ),
        binary("proc_add", "Addition", "%1 + %2", Order::Additive),
        binary("proc_minus", "Subtraction", "%1 - %2", Order::Additive),
        binary(
            "proc_plus_plus",
            "Concatenation: a ++ b",
            "%1 ++ %2",
            Order::Additive,
        ),
        binary(
            "proc_minus_minus",
            "Difference: a -- b",
            "%1 -- %2",
            Order::Additive,
        ),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Arithmetic"))
        .collect()
}

fn comparison() -> Vec<BlockDefinition> {
    let defs = vec![
        binary("proc_lt", "Less than", "%1 < %2", Order::Relational),
        binary("proc_lte", "Less than or equal", "%1 <= %2", Order::Relational),
        binary("proc_gt", "Greater than", "%1 > %2", Order::Relational),
        binary(
            "proc_gte",
            "Greater than or equal",
            "%1 >= %2",
            Order::Relational,
        ),
        binary("proc_eq", "Equality", "%1 == %2", Order::Equality),
        binary("proc_neq", "Inequality", "%1 != %2", Order::Equality),
        binary(
            "proc_matches",
            "Pattern test: a matches b",
            "%1 matches %2",
            Order::Equality,
        ),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Comparison"))
        .collect()
}

fn methods() -> Vec<BlockDefinition> {
    let defs = vec![
        BlockDefinition::expression(
            "proc_method",
            "Method call: obj.method(args)",
            "%1.%2(%3)",
            "Proc",
            Order::Unary,
            vec![
                ArgSlot::value("OBJECT", "Proc", Order::Unary),
                ArgSlot::text("METHOD", "length"),
                ArgSlot::value_any("ARGS", Order::None),
            ],
        ),
        unary("proc_path_map", "Path map: %P", "%%%1"),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Methods & Paths"))
        .collect()
}

fn send_receive() -> Vec<BlockDefinition> {
    let defs = vec![
        send("proc_send", "Send: ch!(args)", "%1!(%2)"),
        send(
            "proc_send_multiple",
            "Persistent send: ch!!(args)",
            "%1!!(%2)",
        ),
        send("proc_send_symm", "Symmetric send: ch!$(args)", "%1!$(%2)"),
        BlockDefinition::statement(
            "proc_send_synch",
            "Synchronous send: ch!?(args) with continuation",
            "%1!?(%2)%3",
            vec![
                ArgSlot::value("CHANNEL", "Name", Order::None),
                ArgSlot::value_any("ARGS", Order::None),
                ArgSlot::value("CONT", "Cont", Order::None),
            ],
        ),
        BlockDefinition::expression(
            "synch_send_cont_empty",
            "Empty synchronous-send continuation",
            ".",
            "Cont",
            Order::Atomic,
            vec![],
        ),
        BlockDefinition::expression(
            "synch_send_cont",
            "Synchronous-send continuation",
            "; %1",
            "Cont",
            Order::None,
            vec![ArgSlot::value_any("BODY", Order::None)],
        ),
        BlockDefinition::statement(
            "proc_for",
            "Receive: for (receipts) { }",
            "for (%1) {\n%2}",
            vec![
                ArgSlot::value("RECEIPTS", "Receipt", Order::None),
                ArgSlot::statement("BODY"),
            ],
        ),
        BlockDefinition::statement(
            "proc_foreach",
            "Iterating receive: foreach (receipts) { }",
            "foreach (%1) {\n%2}",
            vec![
                ArgSlot::value("RECEIPTS", "Receipt", Order::None),
                ArgSlot::statement("BODY"),
            ],
        ),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Send & Receive"))
        .collect()
}

fn composition() -> Vec<BlockDefinition> {
    let defs = vec![BlockDefinition::statement(
        "proc_par",
        "Explicit parallel composition of two bodies",
        "%1 | %2",
        vec![ArgSlot::statement("LEFT"), ArgSlot::statement("RIGHT")],
    )];
    defs.into_iter()
        .map(|d| d.in_category("Composition"))
        .collect()
}

pub fn definitions() -> Vec<BlockDefinition> {
    // The root block is the workspace entry point; it carries no
    // category because it is placed once, not picked from the toolbox.
    let root = BlockDefinition::statement(
        "proc_root",
        "Root process every chain connects to",
        "%1",
        vec![ArgSlot::statement("BODY")],
    );
    let mut defs = vec![root];
    defs.extend(basic());
    defs.extend(logical());
    defs.extend(arithmetic());
    defs.extend(comparison());
    defs.extend(methods());
    defs.extend(send_receive());
    defs.extend(composition());
    defs
}
