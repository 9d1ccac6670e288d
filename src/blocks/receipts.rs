//! Receipts and binds: the receive-side patterns a `for`, `foreach` or
//! `select` branch consumes.

use crate::block::{ArgSlot, BlockDefinition};
use crate::generator::Order;

fn bind(block_type: &str, tooltip: &str, template: &str) -> BlockDefinition {
    BlockDefinition::expression(
        block_type,
        tooltip,
        template,
        "Bind",
        Order::None,
        vec![
            ArgSlot::value("PATTERN", "Name", Order::None),
            ArgSlot::value("SOURCE", "Name", Order::None),
        ],
    )
}

pub fn definitions() -> Vec<BlockDefinition> {
    let defs = vec![
        bind("linear_bind", "Linear bind: pat <- src", "%1 <- %2"),
        bind(
            "linear_bind_receive_send",
            "Receive-send bind: pat <- src?!",
            "%1 <- %2?!",
        ),
        BlockDefinition::expression(
            "linear_bind_send_receive",
            "Send-receive bind: pat <- src!?(args)",
            "%1 <- %2!?(%3)",
            "Bind",
            Order::None,
            vec![
                ArgSlot::value("PATTERN", "Name", Order::None),
                ArgSlot::value("SOURCE", "Name", Order::None),
                ArgSlot::value_any("ARGS", Order::None),
            ],
        ),
        bind("repeated_bind", "Repeated bind: pat <= src", "%1 <= %2"),
        bind("peek_bind", "Peek bind: pat <<- src", "%1 <<- %2"),
        bind(
            "linear_bind_symm",
            "Symmetric linear bind: pat <-> src",
            "%1 <-> %2",
        ),
        bind(
            "repeated_bind_symm",
            "Symmetric repeated bind: pat <=> src",
            "%1 <=> %2",
        ),
        bind(
            "peek_bind_symm",
            "Symmetric peek bind: pat <<->> src",
            "%1 <<->> %2",
        ),
        BlockDefinition::expression(
            "receipt_linear",
            "Linear receipt",
            "%1",
            "Receipt",
            Order::None,
            vec![ArgSlot::value("BINDS", "Bind", Order::None)],
        ),
        BlockDefinition::expression(
            "receipt_repeated",
            "Repeated receipt",
            "%1",
            "Receipt",
            Order::None,
            vec![ArgSlot::value("BINDS", "Bind", Order::None)],
        ),
        BlockDefinition::expression(
            "receipt_peek",
            "Peek receipt",
            "%1",
            "Receipt",
            Order::None,
            vec![ArgSlot::value("BINDS", "Bind", Order::None)],
        ),
        BlockDefinition::expression(
            "concurrent_binds",
            "Concurrent binds joined with &",
            "%1 & %2",
            "Bind",
            Order::None,
            vec![
                ArgSlot::value("LEFT", "Bind", Order::None),
                ArgSlot::value("RIGHT", "Bind", Order::None),
            ],
        ),
        BlockDefinition::expression(
            "sequential_receipts",
            "Sequential receipts joined with ;",
            "%1; %2",
            "Receipt",
            Order::None,
            vec![
                ArgSlot::value("LEFT", "Receipt", Order::None),
                ArgSlot::value("RIGHT", "Receipt", Order::None),
            ],
        ),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Receipts & Binds"))
        .collect()
}
