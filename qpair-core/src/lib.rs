//! Core value types for the qpair two-qubit toolkit
//!
//! This crate provides the foundational types for modeling one- and
//! two-qubit systems:
//! - [`Complex`]: immutable complex-number algebra for amplitudes
//! - [`Qubit`]: a two-level state as a pair of amplitudes, with the
//!   standard single-qubit gates
//! - [`Matrix2`]: fixed-shape 2x2 unitaries and named gate constants
//!
//! Normalization is not enforced by the algebra; callers opt in through
//! [`Qubit::try_new`]. Complex division by a zero-magnitude value
//! propagates NaN instead of raising.
//!
//! # Example
//! ```
//! use qpair_core::Qubit;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = Qubit::ket_one().phase_shift(FRAC_PI_2);
//! assert!((q.beta.im - 1.0).abs() < 1e-10);
//! ```

pub mod complex;
pub mod error;
pub mod matrix;
pub mod qubit;

// Re-exports for convenience
pub use complex::Complex;
pub use error::QubitError;
pub use matrix::Matrix2;
pub use num_complex::Complex64;
pub use qubit::{Qubit, DEFAULT_NORM_TOLERANCE};

/// Type alias for results in qpair-core
pub type Result<T> = std::result::Result<T, QubitError>;
