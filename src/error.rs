//! Error taxonomy for the comparison engine

use thiserror::Error;

/// Hard failures surfaced by the engine.
///
/// Missing rate data and short selections are not errors; they degrade to
/// empty results so that incomplete reference data never takes down a
/// comparison view. A non-positive multiple is malformed reference data and
/// must surface loudly instead of producing a misleading rounded amount.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Permitted investment increments must be positive
    #[error("invalid investment multiple {multiple}: must be positive")]
    InvalidMultiple { multiple: f64 },
}
