//! The code generator: a precedence-aware pretty-printer that walks a
//! block graph and fills each definition's template, recursively
//! resolving slots and joining stacked statement chains with the
//! parallel-composition operator.

mod order;
mod template;

pub use order::Order;

use serde_json::Value;

use crate::block::{ArgSlot, BlockDefinition};
use crate::error::GenerateError;
use crate::graph::{BlockInstance, Workspace};
use crate::registry::BlockRegistry;
use template::{Segment, segment};

/// Indentation unit for nested statement bodies.
pub const INDENT: &str = "  ";

/// Walk guard. The host toolkit's connection rules make graphs acyclic,
/// but a bound turns any future aliasing bug into a clean error instead
/// of a stack overflow.
const MAX_DEPTH: usize = 512;

/// Result of generating a single block: expressions carry the
/// precedence callers need to decide parenthesization, statements are
/// plain text ending in exactly one newline.
enum Emitted {
    Expression { code: String, order: Order },
    Statement { code: String },
}

/// Generates Rholang source text from block instances, driven entirely
/// by the declarative definitions in an injected registry.
///
/// Generation is a pure recursive walk over an immutable snapshot; a
/// generator holds no state between calls and the same graph always
/// yields byte-identical text.
pub struct Generator<'r> {
    registry: &'r BlockRegistry,
}

impl<'r> Generator<'r> {
    pub fn new(registry: &'r BlockRegistry) -> Self {
        Self { registry }
    }

    /// Generates code for every root chain in the workspace, in order,
    /// separated by a blank line.
    pub fn workspace_to_code(&self, workspace: &Workspace) -> Result<String, GenerateError> {
        let chunks = workspace
            .blocks
            .iter()
            .map(|root| self.generate(workspace, root))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(chunks.join("\n"))
    }

    /// Generates code for one root instance and everything stacked
    /// below it. A naked expression root still terminates in a single
    /// trailing newline.
    pub fn generate(
        &self,
        workspace: &Workspace,
        root: &BlockInstance,
    ) -> Result<String, GenerateError> {
        self.emit_chain(workspace, root, 0)
    }

    /// Renders a block and its stacked siblings. Stacking statement
    /// blocks means the processes run concurrently: the chain is joined
    /// as `"{this}\n| {sibling}"`, the one structural rule not driven
    /// by a block definition.
    fn emit_chain(
        &self,
        workspace: &Workspace,
        block: &BlockInstance,
        depth: usize,
    ) -> Result<String, GenerateError> {
        let own = match self.emit_block(workspace, block, depth)? {
            Emitted::Statement { code } => code,
            Emitted::Expression { code, .. } => {
                let mut naked = code.trim_end().to_string();
                naked.push('\n');
                naked
            }
        };
        match &block.next {
            Some(next) => {
                let sibling = self.emit_chain(workspace, next, depth + 1)?;
                let mut joined = own.trim_end().to_string();
                joined.push_str("\n| ");
                joined.push_str(&sibling);
                Ok(joined)
            }
            None => Ok(own),
        }
    }

    /// Generates one block's own text by filling its template.
    fn emit_block(
        &self,
        workspace: &Workspace,
        block: &BlockInstance,
        depth: usize,
    ) -> Result<Emitted, GenerateError> {
        if depth >= MAX_DEPTH {
            return Err(GenerateError::DepthExceeded {
                block_id: block.error_id().to_string(),
                limit: MAX_DEPTH,
            });
        }
        // An unknown type is a hard failure: rendering it as empty text
        // would emit syntactically-incomplete output masquerading as valid.
        let definition = self.registry.lookup(&block.block_type).ok_or_else(|| {
            GenerateError::UnknownBlockType {
                block_id: block.error_id().to_string(),
                type_name: block.block_type.clone(),
            }
        })?;

        let mut code = String::new();
        for piece in segment(&definition.template) {
            match piece {
                Segment::Text(text) => code.push_str(&text),
                Segment::Arg(index) => match definition.args.get(index) {
                    Some(slot) => {
                        code.push_str(&self.resolve_slot(workspace, block, slot, depth)?)
                    }
                    // Keep the placeholder when no slot matches.
                    None => {
                        code.push('%');
                        code.push_str(&(index + 1).to_string());
                    }
                },
            }
        }

        Ok(finish_block(definition, code))
    }

    /// Resolves a single argument slot to its substituted text.
    fn resolve_slot(
        &self,
        workspace: &Workspace,
        block: &BlockInstance,
        slot: &ArgSlot,
        depth: usize,
    ) -> Result<String, GenerateError> {
        match slot {
            ArgSlot::ValueInput { name, binding, .. } => {
                let Some(child) = block.inputs.get(name.as_str()) else {
                    return Ok(String::new());
                };
                match self.emit_block(workspace, child, depth + 1)? {
                    Emitted::Expression { code, order } => Ok(if order.needs_parens(*binding) {
                        format!("({code})")
                    } else {
                        code
                    }),
                    // The host's connection rules keep statements out of
                    // value sockets; render inline if one slips through.
                    Emitted::Statement { code } => Ok(code.trim_end().to_string()),
                }
            }
            ArgSlot::StatementInput { name } => {
                let Some(child) = block.inputs.get(name.as_str()) else {
                    return Ok(String::new());
                };
                let body = self.emit_chain(workspace, child, depth + 1)?;
                Ok(indent(&body))
            }
            ArgSlot::TextField { name, default } | ArgSlot::DropdownField { name, default } => {
                Ok(text_field(block, name, default))
            }
            ArgSlot::NumberField { name, default } => {
                let value = block
                    .fields
                    .get(name.as_str())
                    .and_then(Value::as_f64)
                    .unwrap_or(*default);
                Ok(value.to_string())
            }
            ArgSlot::CheckboxField { name } => {
                // The live editor reports "TRUE"/"FALSE" strings, the
                // save format writes booleans; everything else is false.
                let checked = match block.fields.get(name.as_str()) {
                    Some(Value::Bool(b)) => *b,
                    Some(Value::String(s)) => s == "TRUE",
                    _ => false,
                };
                Ok(if checked { "true" } else { "false" }.to_string())
            }
            ArgSlot::VariableField { name, default } => {
                let raw = match block.fields.get(name.as_str()) {
                    Some(Value::String(s)) => s.clone(),
                    // The save format wraps variable fields as {"id": ...}.
                    Some(Value::Object(map)) => map
                        .get("id")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    _ => String::new(),
                };
                let raw = if raw.is_empty() { default.clone() } else { raw };
                Ok(workspace
                    .variable_name(&raw)
                    .map(str::to_string)
                    .unwrap_or(raw))
            }
        }
    }
}

/// Reads a text-like field, treating an empty string as unset. This
/// mirrors the host toolkit's field widgets, where clearing a field
/// restores its default rather than storing "".
fn text_field(block: &BlockInstance, name: &str, default: &str) -> String {
    match block.fields.get(name) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// Statements are normalized to end in exactly one newline; expressions
/// keep their precedence for the caller's parenthesization decision.
fn finish_block(definition: &BlockDefinition, code: String) -> Emitted {
    match &definition.output {
        Some(output) => Emitted::Expression {
            code,
            order: output.precedence,
        },
        None => {
            let mut code = code.trim_end().to_string();
            code.push('\n');
            Emitted::Statement { code }
        }
    }
}

/// Indents every non-empty line of a nested statement body by one unit,
/// preserving the trailing newline.
fn indent(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    for line in code.lines() {
        if !line.is_empty() {
            out.push_str(INDENT);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
