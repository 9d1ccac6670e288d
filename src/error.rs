use thiserror::Error;

/// Errors that can occur while generating code from a block graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(
        "Block '{block_id}' references an unregistered block type: '{type_name}'. The registry and the graph are out of sync"
    )]
    UnknownBlockType { block_id: String, type_name: String },

    #[error("Recursion limit of {limit} reached while generating block '{block_id}'")]
    DepthExceeded { block_id: String, limit: usize },
}

/// Errors that can occur when loading JSON at the embedder boundary,
/// either a block-definition array or a saved workspace.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("Failed to parse block definitions JSON: {0}")]
    DefinitionsJson(String),

    #[error("Failed to parse workspace save JSON: {0}")]
    WorkspaceJson(String),
}
