//! Tests for definition registration and the JSON boundary.
mod common;
use kumiki::prelude::*;

#[test]
fn register_json_accepts_definitions_with_extra_fields() {
    let mut registry = BlockRegistry::new();
    let json = r#"[{
        "type": "proc_nil",
        "tooltip": "Nil process",
        "message0": "Nil",
        "output": "Proc",
        "colour": "208bfe",
        "helpUrl": "",
        "inputsInline": true
    }]"#;
    assert_eq!(registry.register_json(json).unwrap(), 1);
    let def = registry.lookup("proc_nil").unwrap();
    assert!(def.is_expression());
    assert_eq!(def.template, "Nil");
}

#[test]
fn register_json_skips_malformed_entries_silently() {
    let mut registry = BlockRegistry::new();
    let json = r#"[
        { "type": "good", "message0": "ok" },
        { "message0": "missing type" },
        { "type": "missing_template" }
    ]"#;
    assert_eq!(registry.register_json(json).unwrap(), 1);
    assert!(registry.lookup("good").is_some());
    assert!(registry.lookup("missing_template").is_none());
}

#[test]
fn register_json_rejects_invalid_json() {
    let mut registry = BlockRegistry::new();
    let result = registry.register_json("{ not valid");
    assert!(matches!(result, Err(LoadError::DefinitionsJson(_))));
    assert!(registry.is_empty());
}

#[test]
fn json_loaded_definitions_generate_code() {
    let mut registry = BlockRegistry::new();
    let json = r#"[
        {
            "type": "proc_drop",
            "message0": "*(%1)",
            "args0": [{ "type": "input_value", "name": "CHANNEL", "check": "Name" }],
            "previousStatement": "Proc",
            "nextStatement": "Proc"
        },
        {
            "type": "name_var",
            "message0": "%1",
            "args0": [{ "type": "field_input", "name": "VAR", "text": "x" }],
            "output": "Name"
        }
    ]"#;
    registry.register_json(json).unwrap();

    let drop = BlockInstance::new("proc_drop")
        .with_input("CHANNEL", BlockInstance::new("name_var").with_field("VAR", "ch"));
    let workspace = Workspace::new().with_block(drop);
    let code = Generator::new(&registry).workspace_to_code(&workspace).unwrap();
    assert_eq!(code, "*(ch)\n");
}

#[test]
fn catalog_registers_every_definition_once() {
    let registry = common::catalog_registry();
    let catalog = kumiki::blocks::all();
    assert_eq!(registry.len(), catalog.len());
    for def in &catalog {
        assert!(registry.lookup(&def.block_type).is_some());
    }
}
