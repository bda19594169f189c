//! Error types for joint-state operations

use thiserror::Error;

/// Errors that can occur when decomposing a joint two-qubit state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// The joint state is entangled and has no tensor-product factorization
    #[error(
        "Joint state is not separable: |a00*a11 - a01*a10| = {residual} exceeds tolerance {tolerance}"
    )]
    NonSeparable {
        /// Magnitude of the amplitude-matrix determinant
        residual: f64,
        /// Tolerance the check was performed against
        tolerance: f64,
    },
}

/// Result type for joint-state operations
pub type Result<T> = std::result::Result<T, StateError>;
