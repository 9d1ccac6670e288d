//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types so embedders can pull in the
//! core functionality with a single `use kumiki::prelude::*;`.

// Registry and generation
pub use crate::generator::{Generator, Order};
pub use crate::registry::BlockRegistry;

// Data models
pub use crate::block::{ArgSlot, BlockDefinition, Output};
pub use crate::graph::{BlockInstance, Workspace};

// Editor shell and toolbox projection
pub use crate::editor::{ChangeEvent, Editor};
pub use crate::toolbox::{ToolboxCategory, ToolboxEntry};

// Error types
pub use crate::error::{GenerateError, LoadError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
