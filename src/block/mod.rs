pub mod definition;
pub mod raw;

pub use definition::*;
pub use raw::*;
