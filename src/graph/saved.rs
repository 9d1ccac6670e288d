//! Serde layer for the host toolkit's workspace save format. The
//! embedder hands this JSON over opaquely; only the parts the generator
//! reads are modeled, everything else is ignored.

use ahash::AHashMap;
use serde::Deserialize;

use crate::error::LoadError;
use crate::graph::instance::{BlockInstance, Workspace};

#[derive(Debug, Deserialize)]
pub struct SavedWorkspace {
    #[serde(default)]
    pub blocks: Option<SavedBlockList>,
    #[serde(default)]
    pub variables: Vec<SavedVariable>,
}

#[derive(Debug, Deserialize)]
pub struct SavedBlockList {
    #[serde(default, rename = "languageVersion")]
    pub language_version: u32,
    #[serde(default)]
    pub blocks: Vec<SavedBlock>,
}

#[derive(Debug, Deserialize)]
pub struct SavedBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub fields: AHashMap<String, serde_json::Value>,
    #[serde(default)]
    pub inputs: AHashMap<String, SavedInput>,
    #[serde(default)]
    pub next: Option<Box<SavedConnection>>,
}

/// An input socket: a real block, a shadow placeholder, or both. When
/// both are present the real block wins; the shadow is only what shows
/// when nothing is plugged in.
#[derive(Debug, Deserialize)]
pub struct SavedInput {
    #[serde(default)]
    pub block: Option<Box<SavedBlock>>,
    #[serde(default)]
    pub shadow: Option<Box<SavedBlock>>,
}

#[derive(Debug, Deserialize)]
pub struct SavedConnection {
    pub block: Box<SavedBlock>,
}

#[derive(Debug, Deserialize)]
pub struct SavedVariable {
    pub name: String,
    pub id: String,
}

impl SavedInput {
    fn into_block(self) -> Option<SavedBlock> {
        self.block.or(self.shadow).map(|b| *b)
    }
}

impl SavedBlock {
    fn into_instance(self) -> BlockInstance {
        BlockInstance {
            id: self.id.unwrap_or_default(),
            block_type: self.block_type,
            fields: self.fields,
            inputs: self
                .inputs
                .into_iter()
                .filter_map(|(name, input)| {
                    input.into_block().map(|b| (name, b.into_instance()))
                })
                .collect(),
            next: self.next.map(|conn| Box::new(conn.block.into_instance())),
        }
    }
}

impl Workspace {
    /// Parses the host toolkit's save JSON into the canonical graph
    /// snapshot the generator walks.
    pub fn from_save_json(json: &str) -> Result<Workspace, LoadError> {
        let saved: SavedWorkspace =
            serde_json::from_str(json).map_err(|e| LoadError::WorkspaceJson(e.to_string()))?;
        Ok(Workspace {
            blocks: saved
                .blocks
                .map(|list| list.blocks.into_iter().map(SavedBlock::into_instance).collect())
                .unwrap_or_default(),
            variables: saved
                .variables
                .into_iter()
                .map(|v| (v.id, v.name))
                .collect(),
        })
    }
}
