//! Snap a target amount to a certificate's permitted investment multiple

use crate::error::EngineError;

/// Round `amount` down to the nearest non-negative multiple of `multiple`.
///
/// The realizable investment never exceeds the requested amount. Negative
/// input clamps to zero rather than producing a negative figure.
///
/// A non-positive `multiple` is malformed reference data and fails with
/// [`EngineError::InvalidMultiple`] instead of returning a misleading value.
pub fn round_to_multiple(amount: f64, multiple: f64) -> Result<f64, EngineError> {
    if multiple <= 0.0 {
        return Err(EngineError::InvalidMultiple { multiple });
    }

    Ok(((amount / multiple).floor() * multiple).max(0.0))
}
