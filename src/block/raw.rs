//! Serde layer for the Blockly-style JSON block-definition arrays the
//! embedding application supplies at runtime. Raw structs mirror the
//! wire names; `into_definition` converts to the canonical model,
//! dropping entries too malformed to ever generate code.

use serde::Deserialize;

use crate::block::definition::{ArgSlot, BlockDefinition, Output};
use crate::error::LoadError;
use crate::generator::Order;

/// One entry of the definitions array, as it appears on the wire.
/// Unknown extra fields (colours, inline flags, extensions) are ignored.
#[derive(Debug, Deserialize)]
pub struct RawBlockDefinition {
    #[serde(rename = "type")]
    pub block_type: Option<String>,
    pub message0: Option<String>,
    #[serde(default)]
    pub args0: Vec<RawArg>,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// One entry of `args0`.
#[derive(Debug, Deserialize)]
pub struct RawArg {
    #[serde(rename = "type")]
    pub arg_type: String,
    pub name: Option<String>,
    pub text: Option<String>,
    pub value: Option<f64>,
    #[serde(default)]
    pub check: Option<serde_json::Value>,
    pub variable: Option<String>,
    /// Dropdown options as `[label, value]` pairs.
    pub options: Option<Vec<(String, String)>>,
}

/// Parses a definitions JSON array without converting it yet.
pub fn parse_definitions(json: &str) -> Result<Vec<RawBlockDefinition>, LoadError> {
    serde_json::from_str(json).map_err(|e| LoadError::DefinitionsJson(e.to_string()))
}

/// Connection checks appear as a single tag or an array of tags.
fn checks(value: &serde_json::Value) -> Option<Vec<String>> {
    match value {
        serde_json::Value::String(s) => Some(vec![s.clone()]),
        serde_json::Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
        ),
        _ => None,
    }
}

impl RawArg {
    fn into_slot(self) -> ArgSlot {
        let name = self.name.unwrap_or_default();
        match self.arg_type.as_str() {
            "input_value" => ArgSlot::ValueInput {
                name,
                check: self.check.as_ref().and_then(checks),
                // The JSON format carries no precedence information;
                // atomic on both sides means no parenthesization.
                binding: Order::Atomic,
            },
            "input_statement" => ArgSlot::StatementInput { name },
            "field_number" => ArgSlot::NumberField {
                name,
                default: self.value.unwrap_or(0.0),
            },
            "field_dropdown" => {
                let default = self
                    .options
                    .as_ref()
                    .and_then(|opts| opts.first())
                    .map(|(_, value)| value.clone())
                    .unwrap_or_default();
                ArgSlot::DropdownField { name, default }
            }
            "field_checkbox" => ArgSlot::CheckboxField { name },
            "field_variable" => ArgSlot::VariableField {
                name,
                default: self.variable.unwrap_or_default(),
            },
            // field_input, field_text, plus anything unrecognized: the
            // fallback is to read the field value verbatim.
            _ => ArgSlot::TextField {
                name,
                default: self.text.unwrap_or_default(),
            },
        }
    }
}

impl RawBlockDefinition {
    /// Converts to the canonical model. Returns `None` when the entry
    /// lacks a `type` or a `message0` template; such entries are
    /// skipped at registration time rather than raised.
    pub fn into_definition(self) -> Option<BlockDefinition> {
        let block_type = self.block_type.filter(|t| !t.is_empty())?;
        let template = self.message0?;
        let output = self.output.map(|v| Output {
            check: checks(&v),
            precedence: Order::Atomic,
        });
        Some(BlockDefinition {
            block_type,
            tooltip: self.tooltip.unwrap_or_default(),
            category: self.category,
            template,
            args: self.args0.into_iter().map(RawArg::into_slot).collect(),
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_a_full_definition() {
        let json = r#"[{
            "type": "proc_send",
            "tooltip": "Send a message on a channel",
            "message0": "%1!(%2)",
            "args0": [
                { "type": "input_value", "name": "CHANNEL", "check": "Name" },
                { "type": "input_value", "name": "ARGS", "check": ["Proc", "ProcList"] }
            ],
            "colour": "208bfe",
            "inputsInline": true
        }]"#;
        let raws = parse_definitions(json).unwrap();
        let def = raws
            .into_iter()
            .next()
            .unwrap()
            .into_definition()
            .unwrap();
        assert_eq!(def.block_type, "proc_send");
        assert!(!def.is_expression());
        assert_eq!(def.args.len(), 2);
        match &def.args[1] {
            ArgSlot::ValueInput { check, .. } => {
                assert_eq!(check.as_deref(), Some(&["Proc".to_string(), "ProcList".to_string()][..]));
            }
            other => panic!("expected value input, got {other:?}"),
        }
    }

    #[test]
    fn malformed_entries_convert_to_none() {
        let json = r#"[{ "message0": "no type" }, { "type": "no_template" }]"#;
        let raws = parse_definitions(json).unwrap();
        assert!(raws.into_iter().all(|r| r.into_definition().is_none()));
    }

    #[test]
    fn invalid_json_is_a_load_error() {
        let err = parse_definitions("not json").unwrap_err();
        assert!(err.to_string().contains("definitions"));
    }
}
