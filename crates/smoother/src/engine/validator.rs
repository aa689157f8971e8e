//! Input validation for smoother configuration and data.
//!
//! ## Purpose
//!
//! This module checks the few conditions the smoother refuses to run under:
//! non-finite widths, mismatched coordinate slices, non-finite x-coordinates
//! and builder options set twice.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Permissive on degenerate data**: Empty input, non-positive widths and
//!   identical x-values are valid and never reach an error path.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not check y-values; a non-finite y only affects the
//!   windows that contain it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmootherError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoother configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate that `x` and `y` slices have matching lengths.
    pub fn validate_lengths(x_len: usize, y_len: usize) -> Result<(), SmootherError> {
        if x_len != y_len {
            return Err(SmootherError::MismatchedInputs { x_len, y_len });
        }
        Ok(())
    }

    /// Validate that every x-coordinate is finite.
    ///
    /// Ordering and window scans are meaningless for NaN or infinite positions.
    pub fn validate_coordinates<T: Float>(x: &[T]) -> Result<(), SmootherError> {
        for (i, &xi) in x.iter().enumerate() {
            if !xi.is_finite() {
                return Err(SmootherError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    xi.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the bandwidth. Any finite value is accepted, including zero and negatives.
    pub fn validate_width<T: Float>(width: T) -> Result<(), SmootherError> {
        if !width.is_finite() {
            return Err(SmootherError::InvalidWidth(
                width.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SmootherError> {
        if let Some(param) = duplicate_param {
            return Err(SmootherError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
