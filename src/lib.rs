//! # Kumiki - Block Graph to Rholang Code Generation
//!
//! **Kumiki** turns graphs of visually-composed block instances into
//! Rholang (process-calculus) source text. The generator is driven
//! entirely by declarative block definitions: each definition carries a
//! template with positional `%N` placeholders and typed argument slots,
//! and the generator is a precedence-aware pretty-printer that fills
//! templates recursively. Stacked statement blocks mean parallel
//! composition, so chains are joined with the `|` operator.
//!
//! ## Core Workflow
//!
//! 1. **Register definitions**: fill a [`registry::BlockRegistry`] with
//!    the built-in [`blocks`] catalog, or with a Blockly-style JSON
//!    definitions array supplied by the embedding application.
//! 2. **Snapshot the graph**: obtain a [`graph::Workspace`] view of the
//!    user-edited block graph, either built directly or converted from
//!    the host toolkit's save JSON.
//! 3. **Generate**: walk the snapshot with a [`generator::Generator`];
//!    the same graph always yields byte-identical text.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumiki::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut registry = BlockRegistry::new();
//!     registry.register(kumiki::blocks::all());
//!
//!     // stdout!("hi")
//!     let send = BlockInstance::new("proc_send")
//!         .with_input("CHANNEL", BlockInstance::new("name_var").with_field("VAR", "stdout"))
//!         .with_input("ARGS", BlockInstance::new("ground_string").with_field("VALUE", "hi"));
//!
//!     let workspace = Workspace::new().with_block(send);
//!     let code = Generator::new(&registry).workspace_to_code(&workspace)?;
//!     assert_eq!(code, "stdout!(\"hi\")\n");
//!     Ok(())
//! }
//! ```

pub mod block;
pub mod blocks;
pub mod editor;
pub mod error;
pub mod generator;
pub mod graph;
pub mod prelude;
pub mod registry;
pub mod toolbox;
