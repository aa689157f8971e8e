//! Error types for kernel smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the conditions under which a smoother refuses to run.
//! Degenerate numeric data (empty input, zero width, identical x-values) is
//! never an error; only a misconfigured smoother or unreadable records are.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value, index or field name.
//! * **Deferred**: Builder errors are recorded while chaining and raised by `build()`.
//! * **No-std**: Uses `alloc::string::String` when `std` is disabled.
//!
//! ## Key concepts
//!
//! 1. **Configuration errors**: Unknown kernel names, non-finite widths, duplicates.
//! 2. **Record errors**: A field accessor that finds no number on a record.
//! 3. **Slice errors**: Mismatched or non-finite coordinate slices.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmootherError {
    /// Kernel name does not match any known preset.
    UnknownKernel(String),

    /// Bandwidth must be a finite number.
    InvalidWidth(f64),

    /// No accessor was configured for an axis and the record type has no field lookup.
    MissingAccessor {
        /// Axis name (`"x"` or `"y"`).
        axis: &'static str,
    },

    /// A field accessor did not find a numeric value on a record.
    MissingField {
        /// Original index of the record.
        index: usize,
        /// Name of the field that was looked up.
        field: String,
    },

    /// `x` and `y` slices must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` slice.
        x_len: usize,
        /// Number of elements in the `y` slice.
        y_len: usize,
    },

    /// An x-coordinate is NaN or infinite.
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmootherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnknownKernel(name) => write!(
                f,
                "Unknown kernel: '{name}' (expected one of box, gaussian, triangle, epanechnikov, tricube)"
            ),
            Self::InvalidWidth(width) => write!(f, "Invalid width: {width} (must be finite)"),
            Self::MissingAccessor { axis } => {
                write!(f, "No accessor configured for '{axis}'")
            }
            Self::MissingField { index, field } => {
                write!(f, "Record {index} has no numeric field '{field}'")
            }
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
            ),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmootherError {}
