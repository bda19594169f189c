//! Error types for qpair-core

use thiserror::Error;

/// Errors from the opt-in qubit validation layer
///
/// The core algebra itself never fails: gates are total functions and
/// complex arithmetic propagates NaN instead of raising.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QubitError {
    /// Amplitudes do not satisfy |alpha|² + |beta|² = 1
    #[error("Qubit not normalized, norm = {norm}")]
    NotNormalized {
        /// The offending norm; NaN when an amplitude is not finite
        norm: f64,
    },
}
