//! Ground types: boolean, integer, string and URI literals, plus the
//! simple type tokens.

use crate::block::{ArgSlot, BlockDefinition};
use crate::generator::Order;

pub fn definitions() -> Vec<BlockDefinition> {
    let defs = vec![
        BlockDefinition::expression(
            "ground_bool_true",
            "Boolean true literal",
            "true",
            "Proc",
            Order::Atomic,
            vec![],
        ),
        BlockDefinition::expression(
            "ground_bool_false",
            "Boolean false literal",
            "false",
            "Proc",
            Order::Atomic,
            vec![],
        ),
        BlockDefinition::expression(
            "ground_int",
            "Integer literal",
            "%1",
            "Proc",
            Order::Atomic,
            vec![ArgSlot::number("VALUE", 0.0)],
        ),
        BlockDefinition::expression(
            "ground_string",
            "String literal",
            "\"%1\"",
            "Proc",
            Order::Atomic,
            vec![ArgSlot::text("VALUE", "")],
        ),
        BlockDefinition::expression(
            "ground_uri",
            "URI literal",
            "`%1`",
            "Proc",
            Order::Atomic,
            vec![ArgSlot::text("VALUE", "")],
        ),
        BlockDefinition::expression(
            "simple_type_bool",
            "Bool simple type",
            "Bool",
            "SimpleType",
            Order::Atomic,
            vec![],
        ),
        BlockDefinition::expression(
            "simple_type_int",
            "Int simple type",
            "Int",
            "SimpleType",
            Order::Atomic,
            vec![],
        ),
        BlockDefinition::expression(
            "simple_type_string",
            "String simple type",
            "String",
            "SimpleType",
            Order::Atomic,
            vec![],
        ),
        BlockDefinition::expression(
            "simple_type_uri",
            "Uri simple type",
            "Uri",
            "SimpleType",
            Order::Atomic,
            vec![],
        ),
        BlockDefinition::expression(
            "simple_type_byte_array",
            "ByteArray simple type",
            "ByteArray",
            "SimpleType",
            Order::Atomic,
            vec![],
        ),
    ];
    defs.into_iter()
        .map(|d| d.in_category("Ground Types"))
        .collect()
}
