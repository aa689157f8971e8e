//! Execution engine for kernel smoothing.
//!
//! ## Purpose
//!
//! This module runs the numeric core on coordinates that are already sorted
//! by x: it resolves the window radius, sweeps the windows left to right and
//! aggregates the weighted y-values of each window.
//!
//! ## Design notes
//!
//! * **Two-pointer sweep**: Window bounds only move right, so all windows cost O(n).
//! * **Kernel-agnostic aggregation**: The kernel is resolved once into a
//!   `weight(xi, xj)` evaluator; uniform kernels skip evaluation entirely.
//! * **Read-only**: Inputs are borrowed immutably; outputs are fresh buffers.
//!
//! ## Key concepts
//!
//! * **Weighted sum**: `S = sum(w_ij * y_j)` over the window of `i`.
//! * **Normalization**: Returns `S / W` with `W = sum(w_ij)`, or `S` when disabled.
//! * **Non-positive width**: No kernel is evaluated. The output is the plain
//!   mean of the window, which is the point itself unless other points share
//!   its exact x.
//! * **Collapsed radius**: A positive width over data with a single x-value
//!   gives a radius of 0. The co-located window is still weighed by the kernel
//!   and the normalize flag still applies.
//!
//! ## Invariants
//!
//! * Output `i` depends only on input y-values, never on other outputs.
//! * Every point is a member of its own window.
//!
//! ## Non-goals
//!
//! * This module does not sort, validate, or restore the original order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::bandwidth::{effective_radius, BandwidthMode};
use crate::math::kernel::{Kernel, ResolvedKernel};
use crate::primitives::window::Window;

// ============================================================================
// Configuration
// ============================================================================

/// Numeric configuration consumed by the executor.
#[derive(Debug, Clone)]
pub struct SmoothConfig<T> {
    /// Kernel selector.
    pub kernel: Kernel<T>,

    /// Configured width.
    pub width: T,

    /// Interpretation of the width.
    pub mode: BandwidthMode,

    /// Divide by the total weight.
    pub normalize: bool,

    /// Record the number of points in each window.
    pub return_window_sizes: bool,
}

/// Executor output, in sorted order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Smoothed values aligned with the sorted input.
    pub smoothed: Vec<T>,

    /// Radius used for window membership.
    pub radius: T,

    /// Window size per point, when requested.
    pub window_sizes: Option<Vec<usize>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless smoothing engine.
pub struct SmoothExecutor;

impl SmoothExecutor {
    /// Smooth coordinates sorted by x.
    pub fn run<T: Float>(x: &[T], y: &[T], config: &SmoothConfig<T>) -> ExecutorOutput<T> {
        debug_assert_eq!(x.len(), y.len(), "run: x and y must have equal length");

        let n = x.len();
        let radius = effective_radius(config.width, config.mode, x);

        let mut smoothed = Vec::with_capacity(n);
        let mut window_sizes = if config.return_window_sizes {
            Some(Vec::with_capacity(n))
        } else {
            None
        };

        if n == 0 {
            return ExecutorOutput {
                smoothed,
                radius,
                window_sizes,
            };
        }

        let resolved = if config.width > T::zero() {
            Some(config.kernel.resolve(radius))
        } else {
            None
        };

        let mut window = Window::single(0);
        for i in 0..n {
            window.advance(x, i, radius);

            let value = match &resolved {
                Some(kernel) => Self::weighted_average(x, y, window, i, kernel, config.normalize),
                None => Self::window_mean(y, window),
            };
            smoothed.push(value);

            if let Some(sizes) = window_sizes.as_mut() {
                sizes.push(window.len());
            }
        }

        ExecutorOutput {
            smoothed,
            radius,
            window_sizes,
        }
    }

    /// Weighted aggregation of one window.
    #[inline]
    pub fn weighted_average<T: Float>(
        x: &[T],
        y: &[T],
        window: Window,
        current: usize,
        kernel: &ResolvedKernel<'_, T>,
        normalize: bool,
    ) -> T {
        let members = &y[window.left..=window.right];

        if kernel.is_uniform() {
            let sum = members.iter().fold(T::zero(), |acc, &yj| acc + yj);
            if !normalize {
                return sum;
            }
            let count = T::from(members.len()).unwrap_or(T::one());
            return sum / count;
        }

        let xi = x[current];
        let mut weighted_sum = T::zero();
        let mut total_weight = T::zero();

        for (j, &yj) in members.iter().enumerate() {
            let w = kernel.weight(xi, x[window.left + j]);
            weighted_sum = weighted_sum + w * yj;
            total_weight = total_weight + w;
        }

        if !normalize {
            return weighted_sum;
        }

        // A custom kernel may weigh every member at zero
        if total_weight <= T::zero() {
            return y[current];
        }

        weighted_sum / total_weight
    }

    /// Plain mean of the window's y-values.
    #[inline]
    pub fn window_mean<T: Float>(y: &[T], window: Window) -> T {
        let members = &y[window.left..=window.right];
        let sum = members.iter().fold(T::zero(), |acc, &yj| acc + yj);
        let count = T::from(members.len()).unwrap_or(T::one());
        sum / count
    }
}
