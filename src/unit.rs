//! Borrowed handles to parsed translation units.
use crate::engine::SourceEngine;
use crate::span::SourceRange;
use crate::tokens::TokenSequence;

/// A parsed translation unit held by the source-analysis engine.
///
/// The unit itself is owned by whoever parsed it, not by this layer; the
/// handle only pairs an engine with the engine's native unit value so that
/// tokens can be resolved against the right unit. The handle must outlive
/// every [`TokenSequence`] and [`Token`](crate::tokens::Token) derived from
/// it, which the borrow checker enforces.
pub struct TranslationUnitHandle<'e, E: SourceEngine> {
    engine: &'e E,
    native: &'e E::Unit,
}

impl<'e, E: SourceEngine> TranslationUnitHandle<'e, E> {
    pub fn new(engine: &'e E, native: &'e E::Unit) -> Self {
        Self { engine, native }
    }

    /// The engine that holds this unit.
    pub fn engine(&self) -> &'e E {
        self.engine
    }

    /// The engine's native handle for this unit.
    pub fn native_handle(&self) -> &'e E::Unit {
        self.native
    }

    /// Tokenizes `range` within this unit.
    ///
    /// `range` must have been produced from this same unit.
    pub fn tokenize(&self, range: &SourceRange) -> TokenSequence<'_, E> {
        TokenSequence::new(self, range)
    }
}
