//! Output types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines [`SmoothResult`], which carries the smoothed values
//! together with the parameters that produced them.
//!
//! ## Invariants
//!
//! * `x`, `y` and `window_sizes` (when present) are in the caller's original order.
//! * All populated vectors have the same length as the input data.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::bandwidth::BandwidthMode;

// ============================================================================
// Result Structure
// ============================================================================

/// Smoothed values and the parameters used to compute them.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothResult<T> {
    /// Input x-values, in original order.
    pub x: Vec<T>,

    /// Smoothed values, in original order.
    pub y: Vec<T>,

    /// Effective window radius in x-units.
    pub bandwidth: T,

    /// How the configured width was interpreted.
    pub mode: BandwidthMode,

    /// Name of the kernel used.
    pub kernel: &'static str,

    /// Whether values are weighted averages (`true`) or raw weighted sums.
    pub normalized: bool,

    /// Number of points in each window, if requested.
    pub window_sizes: Option<Vec<usize>>,
}

impl<T: Float> SmoothResult<T> {
    /// Number of smoothed values.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Returns `true` if there were no input records.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Consume the result, keeping only the smoothed values.
    pub fn into_values(self) -> Vec<T> {
        self.y
    }

    /// Mean number of points per window.
    pub fn mean_window_size(&self) -> Option<T> {
        let sizes = self.window_sizes.as_ref()?;
        if sizes.is_empty() {
            return None;
        }
        let total: usize = sizes.iter().sum();
        Some(T::from(total)? / T::from(sizes.len())?)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SmoothResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Kernel:      {}", self.kernel)?;
        writeln!(f, "  Bandwidth:   {} ({})", self.bandwidth, self.mode)?;
        if !self.normalized {
            writeln!(f, "  Normalized:  no (raw weighted sums)")?;
        }
        if let Some(mean) = self.mean_window_size() {
            writeln!(f, "  Mean window: {}", mean)?;
        }
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;

        let has_sizes = self.window_sizes.is_some();

        write!(f, "{:>8} {:>12}", "X", "Y_smooth")?;
        if has_sizes {
            write!(f, " {:>8}", "Window")?;
        }
        writeln!(f)?;

        let line_width = 21 + if has_sizes { 9 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Show first 10 and last 10 if more than 20 points
        let n = self.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;
            if let Some(sizes) = &self.window_sizes {
                write!(f, " {:>8}", sizes[idx])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
