//! Token views and the sequence that owns the engine's token array.
mod sequence;
mod token;

pub use sequence::*;
pub use token::*;
