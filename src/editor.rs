//! The thin shell the embedding application talks to: a
//! definitions-loaded trigger on one side, a workspace-changed event
//! carrying generated code on the other. Rendering, persistence and
//! debouncing all stay with the embedder.

use crate::error::{GenerateError, LoadError};
use crate::generator::Generator;
use crate::graph::Workspace;
use crate::registry::BlockRegistry;

/// Fired after a successful generation run. `snapshot` is the opaque
/// graph state the embedder supplied; the editor never interprets it.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub code: String,
    pub snapshot: serde_json::Value,
}

type ChangeListener = Box<dyn Fn(&ChangeEvent)>;

/// Owns a registry and a listener list; everything else is borrowed
/// per call so the editor itself stays stateless between edits.
#[derive(Default)]
pub struct Editor {
    registry: BlockRegistry,
    listeners: Vec<ChangeListener>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: BlockRegistry) -> Self {
        Self {
            registry,
            listeners: Vec::new(),
        }
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// The definitions-loaded trigger: parses the JSON array and
    /// registers every usable entry. Invalid JSON surfaces as a
    /// `LoadError` for the embedder to present; generation is not
    /// attempted against a half-loaded registry.
    pub fn load_definitions(&mut self, json: &str) -> Result<usize, LoadError> {
        self.registry.register_json(json)
    }

    pub fn on_change(&mut self, listener: impl Fn(&ChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Regenerates code for the current graph snapshot and notifies
    /// listeners. Errors propagate synchronously to the caller instead
    /// of reaching listeners; a failed run fires no event.
    pub fn workspace_changed(
        &self,
        workspace: &Workspace,
        snapshot: serde_json::Value,
    ) -> Result<ChangeEvent, GenerateError> {
        let code = Generator::new(&self.registry).workspace_to_code(workspace)?;
        let event = ChangeEvent { code, snapshot };
        for listener in &self.listeners {
            listener(&event);
        }
        Ok(event)
    }
}
