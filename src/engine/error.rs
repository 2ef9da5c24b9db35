//! Error types reported by the engine call surface.
use thiserror::Error;

/// An error reported by the source-analysis engine.
///
/// Errors raised by the per-token accessors indicate corruption in the
/// shared translation unit state, which this layer cannot repair; they are
/// passed through to the caller unchanged.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("translation unit is no longer valid")]
    InvalidUnit,
    #[error("engine call failed: {0}")]
    Backend(String),
}
