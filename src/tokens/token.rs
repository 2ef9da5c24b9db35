//! Read-only views of single tokens, as produced by a [`TokenSequence`].
use std::fmt::{self, Display};

use crate::engine::{EngineError, SourceEngine};
use crate::span::{SourceLocation, SourceRange};

use super::TokenSequence;

/// The lexical category of a token, as the engine reports it for the owning
/// translation unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A punctuation or operator character, such as `=` or `;`.
    Punctuation,
    /// A reserved keyword of the parsed language.
    Keyword,
    Identifier,
    /// A numeric, character, or string literal.
    Literal,
    Comment,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Punctuation => "punctuation",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Literal => "literal",
            TokenKind::Comment => "comment",
        };
        write!(f, "{}", name)
    }
}

/// A read-only view of one lexical token.
///
/// A token is only meaningful alongside the array entry it describes, so it
/// borrows the owning [`TokenSequence`] and addresses that entry by index
/// rather than holding anything of its own. It can never outlive the
/// sequence, and it never copies the entry out of the engine's array.
pub struct Token<'s, E: SourceEngine> {
    sequence: &'s TokenSequence<'s, E>,
    index: usize,
}

impl<'s, E: SourceEngine> Token<'s, E> {
    pub(super) fn new(sequence: &'s TokenSequence<'s, E>, index: usize) -> Self {
        Self { sequence, index }
    }

    /// The position of this token within its sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The lexical category of this token.
    pub fn kind(&self) -> Result<TokenKind, EngineError> {
        self.sequence
            .engine()
            .token_kind(self.sequence.native_unit(), self.sequence.array(), self.index)
    }

    /// The exact source text of this token, as an independently owned copy.
    pub fn spelling(&self) -> Result<String, EngineError> {
        self.sequence
            .engine()
            .token_spelling(self.sequence.native_unit(), self.sequence.array(), self.index)
    }

    /// The position of the first character of this token.
    pub fn location(&self) -> Result<SourceLocation, EngineError> {
        self.sequence
            .engine()
            .token_location(self.sequence.native_unit(), self.sequence.array(), self.index)
    }

    /// The `[start, end)` range spanned by this token's text.
    pub fn extent(&self) -> Result<SourceRange, EngineError> {
        self.sequence
            .engine()
            .token_extent(self.sequence.native_unit(), self.sequence.array(), self.index)
    }
}
