use crate::generator::Order;

/// The canonical definition of one kind of visual block, ready for
/// registration. This is the target structure for the raw JSON
/// conversion and the form the built-in catalog constructs directly.
#[derive(Debug, Clone)]
pub struct BlockDefinition {
    /// Unique identifier; the stable key instances reference.
    pub block_type: String,
    /// Human-readable description, matched by the toolbox filter.
    pub tooltip: String,
    /// Toolbox category the block is listed under.
    pub category: Option<String>,
    /// Display/code template with positional `%N` placeholders mapping
    /// 1:1, in order, onto `args`.
    pub template: String,
    /// Ordered argument slots behind the template placeholders.
    pub args: Vec<ArgSlot>,
    /// Present for expression-shaped blocks; absent for statements.
    pub output: Option<Output>,
}

/// Output typing of an expression-shaped block.
#[derive(Debug, Clone)]
pub struct Output {
    /// Advisory connection type tags; `None` plugs anywhere.
    pub check: Option<Vec<String>>,
    /// Precedence of the construct this block emits.
    pub precedence: Order,
}

/// A single argument slot of a block definition.
///
/// Blockly expresses these as string-keyed arg types; here they are a
/// closed sum so the generator's dispatch is exhaustive.
#[derive(Debug, Clone)]
pub enum ArgSlot {
    /// A socket accepting a connected expression child.
    ValueInput {
        name: String,
        check: Option<Vec<String>>,
        /// Minimum acceptable precedence for the child; anything that
        /// binds looser is parenthesized on substitution.
        binding: Order,
    },
    /// A socket accepting a connected statement chain, rendered indented.
    StatementInput { name: String },
    /// Free-text literal field.
    TextField { name: String, default: String },
    /// Numeric literal field, rendered via its canonical decimal string.
    NumberField { name: String, default: f64 },
    /// Dropdown field; the stored value is emitted verbatim.
    DropdownField { name: String, default: String },
    /// Checkbox field, rendered as the tokens `true` / `false`. A
    /// stored `"TRUE"` (or JSON `true`) is true, anything else false.
    CheckboxField { name: String },
    /// Variable reference field, resolved through the workspace's
    /// variable table with the raw identifier as fallback.
    VariableField { name: String, default: String },
}

impl ArgSlot {
    pub fn name(&self) -> &str {
        match self {
            ArgSlot::ValueInput { name, .. }
            | ArgSlot::StatementInput { name }
            | ArgSlot::TextField { name, .. }
            | ArgSlot::NumberField { name, .. }
            | ArgSlot::DropdownField { name, .. }
            | ArgSlot::CheckboxField { name }
            | ArgSlot::VariableField { name, .. } => name,
        }
    }

    pub fn value(name: &str, check: &str, binding: Order) -> Self {
        ArgSlot::ValueInput {
            name: name.to_string(),
            check: Some(vec![check.to_string()]),
            binding,
        }
    }

    pub fn value_any(name: &str, binding: Order) -> Self {
        ArgSlot::ValueInput {
            name: name.to_string(),
            check: None,
            binding,
        }
    }

    pub fn statement(name: &str) -> Self {
        ArgSlot::StatementInput {
            name: name.to_string(),
        }
    }

    pub fn text(name: &str, default: &str) -> Self {
        ArgSlot::TextField {
            name: name.to_string(),
            default: default.to_string(),
        }
    }

    pub fn number(name: &str, default: f64) -> Self {
        ArgSlot::NumberField {
            name: name.to_string(),
            default,
        }
    }

    pub fn dropdown(name: &str, default: &str) -> Self {
        ArgSlot::DropdownField {
            name: name.to_string(),
            default: default.to_string(),
        }
    }

    pub fn checkbox(name: &str) -> Self {
        ArgSlot::CheckboxField {
            name: name.to_string(),
        }
    }

    pub fn variable(name: &str, default: &str) -> Self {
        ArgSlot::VariableField {
            name: name.to_string(),
            default: default.to_string(),
        }
    }
}

impl BlockDefinition {
    /// Builds an expression-shaped definition emitting at `precedence`.
    pub fn expression(
        block_type: &str,
        tooltip: &str,
        template: &str,
        check: &str,
        precedence: Order,
        args: Vec<ArgSlot>,
    ) -> Self {
        Self {
            block_type: block_type.to_string(),
            tooltip: tooltip.to_string(),
            category: None,
            template: template.to_string(),
            args,
            output: Some(Output {
                check: Some(vec![check.to_string()]),
                precedence,
            }),
        }
    }

    /// Builds a statement-shaped definition.
    pub fn statement(block_type: &str, tooltip: &str, template: &str, args: Vec<ArgSlot>) -> Self {
        Self {
            block_type: block_type.to_string(),
            tooltip: tooltip.to_string(),
            category: None,
            template: template.to_string(),
            args,
            output: None,
        }
    }

    pub fn in_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Expression-shaped blocks yield a value with a precedence; the
    /// rest participate only in statement chains.
    pub fn is_expression(&self) -> bool {
        self.output.is_some()
    }

    /// Registration tolerance: entries without a type or template are
    /// unusable and are skipped, never raised.
    pub fn is_registrable(&self) -> bool {
        !self.block_type.is_empty() && !self.template.is_empty()
    }
}
