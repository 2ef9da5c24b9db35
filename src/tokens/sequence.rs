//! Ownership and lifecycle of engine-allocated token arrays.
use log::debug;

use crate::engine::SourceEngine;
use crate::span::SourceRange;
use crate::unit::TranslationUnitHandle;

use super::Token;

/// The ordered sequence of lexical tokens covering one source range.
///
/// Constructing a sequence runs the engine's tokenize operation once; the
/// sequence then becomes the sole owner of the engine-allocated token array
/// and releases it exactly once when it is dropped. The sequence is
/// deliberately neither [`Clone`] nor [`Copy`]: a duplicate would allow the
/// array to be disposed twice.
pub struct TokenSequence<'tu, E: SourceEngine> {
    unit: &'tu TranslationUnitHandle<'tu, E>,
    array: Option<E::TokenArray>,
    len: usize,
}

impl<'tu, E: SourceEngine> TokenSequence<'tu, E> {
    /// Tokenizes `range` within `unit`.
    ///
    /// The engine reports an invalid or unparseable range as a zero-length
    /// result rather than as an error, so construction always succeeds; an
    /// unhelpful range simply produces an empty sequence. `range` must have
    /// been produced from the same live unit as `unit`.
    pub fn new(unit: &'tu TranslationUnitHandle<'tu, E>, range: &SourceRange) -> Self {
        match unit.engine().tokenize(unit.native_handle(), range) {
            Some((array, len)) => Self {
                unit,
                array: Some(array),
                len,
            },
            None => Self {
                unit,
                array: None,
                len: 0,
            },
        }
    }

    /// The number of tokens covering the tokenized range.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Produces a view of the `index`-th token, or [`None`] if `index` is
    /// out of bounds. The array entry itself stays owned by this sequence.
    pub fn get(&self, index: usize) -> Option<Token<'_, E>> {
        if index < self.len {
            Some(Token::new(self, index))
        } else {
            None
        }
    }

    /// Iterates over the tokens in source order.
    pub fn iter<'s>(&'s self) -> impl Iterator<Item = Token<'s, E>> + 's {
        let sequence: &'s TokenSequence<'s, E> = self;
        (0..self.len).map(move |index| Token::new(sequence, index))
    }

    pub(super) fn engine(&self) -> &E {
        self.unit.engine()
    }

    pub(super) fn native_unit(&self) -> &E::Unit {
        self.unit.native_handle()
    }

    pub(super) fn array(&self) -> &E::TokenArray {
        self.array
            .as_ref()
            .expect("Token views cannot exist for an empty sequence")
    }
}

impl<E: SourceEngine> Drop for TokenSequence<'_, E> {
    /// Releases the engine's token array exactly once, on every exit path.
    ///
    /// A zero-length tokenize result allocated nothing, so nothing is passed
    /// to disposal for it. Nothing can meaningfully report an error from a
    /// drop, so a failed disposal is suppressed and logged at debug level.
    fn drop(&mut self) {
        if let Some(array) = self.array.take() {
            let result = self
                .unit
                .engine()
                .dispose_tokens(self.unit.native_handle(), array, self.len);
            if let Err(error) = result {
                debug!("Suppressing token array disposal failure: {}", error);
            }
        }
    }
}
