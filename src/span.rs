//! Contains the [`SourceLocation`] and [`SourceRange`] types, which describe
//! positions within a translation unit's source code.
use std::fmt::{self, Debug, Display};

/// A single position in a translation unit's source: the file it belongs to,
/// its 1-based line and column, and its byte offset from the start of the
/// file.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceLocation {
    file: String,
    line: u32,
    column: u32,
    offset: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32, offset: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            offset,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Retrieves the byte offset of this position within its file.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

impl Debug for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self, self.offset)
    }
}

/// A half-open `[start, end)` pair of positions within one translation unit.
///
/// The unit that produced a range must be the same live unit the range is
/// later used against; ranges carry no back-reference of their own.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceRange {
    start: SourceLocation,
    end: SourceLocation,
}

impl SourceRange {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &SourceLocation {
        &self.start
    }

    pub fn end(&self) -> &SourceLocation {
        &self.end
    }
}

impl Debug for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}
