//! Tests for the code generator: template filling, precedence,
//! chain joining and field semantics.
mod common;
use common::*;
use kumiki::prelude::*;

#[test]
fn send_block_generates_channel_call() {
    let code = generate(send("stdout", string("hi"))).unwrap();
    assert_eq!(code, "stdout!(\"hi\")\n");
}

#[test]
fn generation_is_deterministic() {
    let registry = catalog_registry();
    let workspace = Workspace::new().with_block(send("stdout", string("hi")));
    let generator = Generator::new(&registry);
    let first = generator.workspace_to_code(&workspace).unwrap();
    let second = generator.workspace_to_code(&workspace).unwrap();
    assert_eq!(first, second);
}

#[test]
fn looser_child_is_parenthesized() {
    // a * (b + c): the addition must keep its parentheses.
    let add = BlockInstance::new("proc_add")
        .with_input("LEFT", var("b"))
        .with_input("RIGHT", var("c"));
    let mult = BlockInstance::new("proc_mult")
        .with_input("LEFT", var("a"))
        .with_input("RIGHT", add);
    assert_eq!(generate(mult).unwrap(), "a * (b + c)\n");
}

#[test]
fn tighter_child_is_not_parenthesized() {
    // (a * b) + c regenerates without redundant parentheses.
    let mult = BlockInstance::new("proc_mult")
        .with_input("LEFT", var("a"))
        .with_input("RIGHT", var("b"));
    let add = BlockInstance::new("proc_add")
        .with_input("LEFT", mult)
        .with_input("RIGHT", var("c"));
    assert_eq!(generate(add).unwrap(), "a * b + c\n");
}

#[test]
fn right_nested_equal_precedence_keeps_parentheses() {
    // Subtraction is left-associative: a - (b - c) must not flatten
    // into a - b - c.
    let inner = BlockInstance::new("proc_minus")
        .with_input("LEFT", var("b"))
        .with_input("RIGHT", var("c"));
    let outer = BlockInstance::new("proc_minus")
        .with_input("LEFT", var("a"))
        .with_input("RIGHT", inner);
    assert_eq!(generate(outer).unwrap(), "a - (b - c)\n");

    let nested_div = BlockInstance::new("proc_div")
        .with_input("LEFT", var("y"))
        .with_input("RIGHT", var("z"));
    let div = BlockInstance::new("proc_div")
        .with_input("LEFT", var("x"))
        .with_input("RIGHT", nested_div);
    assert_eq!(generate(div).unwrap(), "x / (y / z)\n");
}

#[test]
fn left_nested_equal_precedence_stays_flat() {
    let inner = BlockInstance::new("proc_minus")
        .with_input("LEFT", var("a"))
        .with_input("RIGHT", var("b"));
    let outer = BlockInstance::new("proc_minus")
        .with_input("LEFT", inner)
        .with_input("RIGHT", var("c"));
    assert_eq!(generate(outer).unwrap(), "a - b - c\n");
}

#[test]
fn top_level_chains_are_separated_by_a_blank_line() {
    let registry = catalog_registry();
    let workspace = Workspace::new()
        .with_block(send("out", int(1.0)))
        .with_block(send("out", int(2.0)));
    let code = Generator::new(&registry).workspace_to_code(&workspace).unwrap();
    assert_eq!(code, "out!(1)\n\nout!(2)\n");
}

#[test]
fn stacked_statements_join_as_parallel_processes() {
    let mut registry = BlockRegistry::new();
    registry.register(vec![
        BlockDefinition::statement("stmt_x", "emits X", "X", vec![]),
        BlockDefinition::statement("stmt_y", "emits Y", "Y", vec![]),
        BlockDefinition::statement("stmt_z", "emits Z", "Z", vec![]),
    ]);
    let chain = BlockInstance::new("stmt_x")
        .with_next(BlockInstance::new("stmt_y").with_next(BlockInstance::new("stmt_z")));
    let workspace = Workspace::new().with_block(chain);
    let code = Generator::new(&registry).workspace_to_code(&workspace).unwrap();
    assert_eq!(code, "X\n| Y\n| Z\n");
}

#[test]
fn naked_value_ends_in_exactly_one_newline() {
    let code = generate(int(42.0)).unwrap();
    assert_eq!(code, "42\n");
}

#[test]
fn statement_ends_in_exactly_one_newline() {
    let code = generate(send("out", int(1.0))).unwrap();
    assert!(code.ends_with("(1)\n"));
    assert!(!code.ends_with("\n\n"));
}

#[test]
fn unset_text_field_falls_back_to_default() {
    // proc_var's VAR field defaults to "x".
    assert_eq!(generate(BlockInstance::new("proc_var")).unwrap(), "x\n");
}

#[test]
fn empty_text_field_is_treated_as_unset() {
    let code = generate(BlockInstance::new("proc_var").with_field("VAR", "")).unwrap();
    assert_eq!(code, "x\n");
}

#[test]
fn unplugged_value_slot_renders_empty() {
    let code = generate(BlockInstance::new("proc_send").with_input("CHANNEL", name("ch"))).unwrap();
    assert_eq!(code, "ch!()\n");
}

#[test]
fn unknown_block_type_fails_without_partial_output() {
    let registry = catalog_registry();
    let chain = send("out", int(1.0)).with_next(BlockInstance::new("mystery").with_id("b9"));
    let workspace = Workspace::new().with_block(chain);
    let result = Generator::new(&registry).workspace_to_code(&workspace);
    match result {
        Err(GenerateError::UnknownBlockType { block_id, type_name }) => {
            assert_eq!(block_id, "b9");
            assert_eq!(type_name, "mystery");
        }
        other => panic!("expected UnknownBlockType, got {other:?}"),
    }
}

#[test]
fn checkbox_maps_true_token_only_for_true_values() {
    let mut registry = BlockRegistry::new();
    registry.register(vec![BlockDefinition::expression(
        "flag",
        "a checkbox",
        "%1",
        "Proc",
        Order::Atomic,
        vec![ArgSlot::checkbox("ENABLED")],
    )]);
    let generator = Generator::new(&registry);
    let cases: Vec<(BlockInstance, &str)> = vec![
        (BlockInstance::new("flag").with_field("ENABLED", "TRUE"), "true\n"),
        (BlockInstance::new("flag").with_field("ENABLED", "FALSE"), "false\n"),
        (BlockInstance::new("flag").with_field("ENABLED", ""), "false\n"),
        (BlockInstance::new("flag"), "false\n"),
        (BlockInstance::new("flag").with_field("ENABLED", true), "true\n"),
    ];
    for (block, expected) in cases {
        let workspace = Workspace::new().with_block(block);
        assert_eq!(generator.workspace_to_code(&workspace).unwrap(), expected);
    }
}

#[test]
fn numbers_render_their_canonical_decimal_string() {
    assert_eq!(generate(int(42.0)).unwrap(), "42\n");
    assert_eq!(generate(int(2.5)).unwrap(), "2.5\n");
    assert_eq!(generate(int(-7.0)).unwrap(), "-7\n");
}

#[test]
fn variable_field_resolves_through_the_workspace_table() {
    let mut registry = BlockRegistry::new();
    registry.register(vec![BlockDefinition::expression(
        "var_ref",
        "a variable reference",
        "%1",
        "Proc",
        Order::Atomic,
        vec![ArgSlot::variable("VAR", "")],
    )]);
    let generator = Generator::new(&registry);

    let bound = Workspace::new()
        .with_variable("id1", "chan")
        .with_block(BlockInstance::new("var_ref").with_field("VAR", "id1"));
    assert_eq!(generator.workspace_to_code(&bound).unwrap(), "chan\n");

    // No binding: the raw identifier is the fallback.
    let unbound =
        Workspace::new().with_block(BlockInstance::new("var_ref").with_field("VAR", "id1"));
    assert_eq!(generator.workspace_to_code(&unbound).unwrap(), "id1\n");
}

#[test]
fn statement_bodies_are_indented() {
    let new_block = BlockInstance::new("proc_new")
        .with_input(
            "NAMES",
            BlockInstance::new("name_decl_simple").with_field("VAR", "ch"),
        )
        .with_input("BODY", send("ch", string("hi")));
    let code = generate(new_block).unwrap();
    assert_eq!(code, "new ch in {\n  ch!(\"hi\")\n}\n");
}

#[test]
fn for_block_renders_receipt_and_body() {
    let bind = BlockInstance::new("linear_bind")
        .with_input("PATTERN", name("x"))
        .with_input("SOURCE", name("ch"));
    let receipt = BlockInstance::new("receipt_linear").with_input("BINDS", bind);
    let for_block = BlockInstance::new("proc_for")
        .with_input("RECEIPTS", receipt)
        .with_input("BODY", send("out", var("x")));
    assert_eq!(
        generate(for_block).unwrap(),
        "for (x <- ch) {\n  out!(x)\n}\n"
    );
}

#[test]
fn runaway_nesting_hits_the_depth_guard() {
    let mut block = var("x");
    for _ in 0..600 {
        block = BlockInstance::new("proc_paren").with_input("EXPR", block);
    }
    let registry = catalog_registry();
    let workspace = Workspace::new().with_block(block);
    let result = Generator::new(&registry).workspace_to_code(&workspace);
    assert!(matches!(result, Err(GenerateError::DepthExceeded { .. })));
}
