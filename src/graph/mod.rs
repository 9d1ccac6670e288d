pub mod instance;
pub mod saved;

pub use instance::*;
pub use saved::*;
