//! The built-in Rholang block catalog: declarative definitions only,
//! grouped the way the editor's toolbox groups them. Each entry carries
//! the real precedence and slot-binding levels of its construct; the
//! generator supplies all behavior.

pub mod collections;
pub mod control;
pub mod declarations;
pub mod ground;
pub mod names;
pub mod processes;
pub mod receipts;

use crate::block::BlockDefinition;

/// The whole catalog, for one-call registration.
pub fn all() -> Vec<BlockDefinition> {
    let mut defs = Vec::new();
    defs.extend(ground::definitions());
    defs.extend(names::definitions());
    defs.extend(collections::definitions());
    defs.extend(receipts::definitions());
    defs.extend(control::definitions());
    defs.extend(declarations::definitions());
    defs.extend(processes::definitions());
    defs
}
