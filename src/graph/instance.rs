use ahash::AHashMap;
use serde_json::Value;

/// A read-only snapshot of the user-edited block graph.
///
/// The host toolkit owns block lifetime; this model is what the
/// generator walks. Top-level `blocks` are the chain roots, and
/// `variables` maps variable ids to their bound display names.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub blocks: Vec<BlockInstance>,
    pub variables: AHashMap<String, String>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, block: BlockInstance) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn with_variable(mut self, id: &str, name: &str) -> Self {
        self.variables.insert(id.to_string(), name.to_string());
        self
    }

    pub fn variable_name(&self, id: &str) -> Option<&str> {
        self.variables.get(id).map(String::as_str)
    }
}

/// One concrete block placed in the workspace.
///
/// `next` is the sibling stacked below this block. For statement-shaped
/// blocks that stack means parallel composition, not sequencing: the
/// chain is joined with `|` at generation time.
#[derive(Debug, Clone)]
pub struct BlockInstance {
    pub id: String,
    pub block_type: String,
    /// Literal field values keyed by slot name.
    pub fields: AHashMap<String, Value>,
    /// Connected children keyed by slot name; absence means unplugged.
    pub inputs: AHashMap<String, BlockInstance>,
    pub next: Option<Box<BlockInstance>>,
}

impl BlockInstance {
    pub fn new(block_type: &str) -> Self {
        Self {
            id: String::new(),
            block_type: block_type.to_string(),
            fields: AHashMap::new(),
            inputs: AHashMap::new(),
            next: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn with_input(mut self, name: &str, child: BlockInstance) -> Self {
        self.inputs.insert(name.to_string(), child);
        self
    }

    pub fn with_next(mut self, next: BlockInstance) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    /// Identifier used in error messages; instances built by hand may
    /// not carry an id, in which case the type is the best handle.
    pub fn error_id(&self) -> &str {
        if self.id.is_empty() {
            &self.block_type
        } else {
            &self.id
        }
    }
}
