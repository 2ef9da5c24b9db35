//! A typed, resource-safe view over lexical tokens produced by an external
//! source-analysis engine.
//!
//! The engine parses source code into translation units and hands out tokens
//! through an opaque handle API. This crate covers the tokenization surface
//! of that API: [`TokenSequence`] runs the engine's tokenize operation over a
//! [`SourceRange`] and becomes the sole owner of the engine-allocated token
//! array, releasing it exactly once when dropped. [`Token`] is a borrowing
//! view of a single entry in that array, exposing its kind, spelling,
//! location, and extent.
//!
//! The engine itself is abstracted behind the [`SourceEngine`] trait;
//! constructing and reparsing translation units, cursor traversal, and the
//! raw call surface all live with the engine adapter, not here.
pub mod engine;
pub mod span;
pub mod tokens;
pub mod unit;

pub use engine::{EngineError, SourceEngine};
pub use span::{SourceLocation, SourceRange};
pub use tokens::{Token, TokenKind, TokenSequence};
pub use unit::TranslationUnitHandle;
