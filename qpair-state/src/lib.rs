//! Joint two-qubit state and controlled gates for qpair
//!
//! Builds on the value types of `qpair-core` to model a control/target
//! pair through a two-qubit gate:
//!
//! - [`JointState`]: the four-amplitude joint state over |00⟩..|11⟩
//! - [`controlled_not`] / [`controlled_unitary`]: entangling operations
//!   that report the joint state rather than guessing a qubit pair
//! - [`JointState::factor`]: recovers a [`QubitPair`] when the state is
//!   separable, and reports [`StateError::NonSeparable`] when it is not
//!
//! # Example
//!
//! ```
//! use qpair_core::Qubit;
//! use qpair_state::{controlled_not, DEFAULT_SEPARABILITY_TOLERANCE};
//!
//! let bell = controlled_not(&Qubit::ket_plus(), &Qubit::ket_zero());
//! assert!(!bell.is_separable(DEFAULT_SEPARABILITY_TOLERANCE));
//! assert!(bell.factor(DEFAULT_SEPARABILITY_TOLERANCE).is_err());
//! ```

pub mod controlled;
pub mod error;
pub mod joint;

pub use controlled::{controlled_not, controlled_unitary};
pub use error::{Result, StateError};
pub use joint::{JointState, QubitPair, DEFAULT_SEPARABILITY_TOLERANCE};
