//! The tokenization call surface consumed from the source-analysis engine.
mod error;


pub use error::*;

use crate::span::{SourceLocation, SourceRange};
use crate::tokens::TokenKind;

/// The tokenization operations of a source-analysis engine.
///
/// Engine adapters implement this trait over their native handle types. The
/// token array returned by [`tokenize`](SourceEngine::tokenize) stays owned
/// by the engine; the caller holds it only to pass it back into the other
/// operations, and must hand it to
/// [`dispose_tokens`](SourceEngine::dispose_tokens) exactly once.
/// [`TokenSequence`](crate::tokens::TokenSequence) enforces that discipline.
pub trait SourceEngine {
    /// The engine's native translation unit handle.
    type Unit;
    /// Engine-owned token array storage. Opaque to this crate; entries are
    /// addressed by index through the accessor operations.
    type TokenArray;

    /// Tokenizes `range` within `unit`, producing the engine-allocated token
    /// array together with the number of tokens in it.
    ///
    /// An invalid or unparseable range is reported as [`None`] rather than as
    /// an error; nothing is allocated in that case and there is nothing to
    /// dispose. `range` must have been produced from the same live `unit`.
    fn tokenize(
        &self,
        unit: &Self::Unit,
        range: &SourceRange,
    ) -> Option<(Self::TokenArray, usize)>;

    /// Reports the lexical category of the token at `index`.
    fn token_kind(
        &self,
        unit: &Self::Unit,
        tokens: &Self::TokenArray,
        index: usize,
    ) -> Result<TokenKind, EngineError>;

    /// Copies the exact source text of the token at `index` out of the
    /// engine, with no shared lifetime with engine-internal buffers.
    fn token_spelling(
        &self,
        unit: &Self::Unit,
        tokens: &Self::TokenArray,
        index: usize,
    ) -> Result<String, EngineError>;

    /// Reports the position of the first character of the token at `index`.
    fn token_location(
        &self,
        unit: &Self::Unit,
        tokens: &Self::TokenArray,
        index: usize,
    ) -> Result<SourceLocation, EngineError>;

    /// Reports the half-open range spanned by the text of the token at
    /// `index`, in the owning unit's coordinate space.
    fn token_extent(
        &self,
        unit: &Self::Unit,
        tokens: &Self::TokenArray,
        index: usize,
    ) -> Result<SourceRange, EngineError>;

    /// Releases a token array previously produced by
    /// [`tokenize`](SourceEngine::tokenize), together with the count that
    /// came with it. Called exactly once per array, with the same `unit` the
    /// array was tokenized from.
    fn dispose_tokens(
        &self,
        unit: &Self::Unit,
        tokens: Self::TokenArray,
        count: usize,
    ) -> Result<(), EngineError>;
}
