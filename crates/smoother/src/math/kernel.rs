//! Kernel (weight) functions for local averaging.
//!
//! ## Purpose
//!
//! This module maps a kernel selector to a weight evaluator. A selector is
//! either a named preset ([`KernelFunction`]) or a caller-supplied function
//! of the two x positions. Both are resolved against the effective radius
//! into a single `weight(xi, xj)` interface, so aggregation never branches on
//! the kernel kind.
//!
//! ## Design notes
//!
//! * **Hard cutoff**: The window radius decides membership; kernels only weight
//!   points already inside the window. Nothing outside contributes, even for
//!   the Gaussian whose formula never reaches zero.
//! * **Normalized distance**: Presets are evaluated at `u = |xi - xj| / radius`,
//!   so `u` lies in `[0, 1]` for every window member.
//! * **Gaussian scale**: The radius spans [`GAUSSIAN_CUTOFF`] standard deviations.
//!
//! ## Invariants
//!
//! * Every preset is non-negative, symmetric and weighs `u = 0` at exactly 1.
//!
//! ## Non-goals
//!
//! * This module does not decide window membership or the radius.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, sync::Arc};
#[cfg(feature = "std")]
use std::sync::Arc;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::SmootherError;

// ============================================================================
// Constants
// ============================================================================

/// Number of standard deviations covered by the window radius for the Gaussian kernel.
///
/// A window of radius `r` therefore uses `sigma = r / 3`, and the weight at
/// the edge of the window is `exp(-4.5)` (about 0.011).
pub const GAUSSIAN_CUTOFF: f64 = 3.0;

// ============================================================================
// Named Presets
// ============================================================================

/// Named kernel presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum KernelFunction {
    /// Box (uniform) kernel: K(u) = 1 inside the window.
    ///
    /// This is the default.
    #[default]
    Box,

    /// Gaussian kernel: K(u) = exp(-(3u)^2 / 2), truncated at the window edge.
    Gaussian,

    /// Triangular kernel: K(u) = 1 - u.
    Triangle,

    /// Epanechnikov kernel: K(u) = 1 - u^2.
    Epanechnikov,

    /// Tricube kernel: K(u) = (1 - u^3)^3.
    Tricube,
}

impl KernelFunction {
    /// All presets, in declaration order.
    pub const ALL: [KernelFunction; 5] = [
        KernelFunction::Box,
        KernelFunction::Gaussian,
        KernelFunction::Triangle,
        KernelFunction::Epanechnikov,
        KernelFunction::Tricube,
    ];

    /// Get the canonical name of the kernel.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            KernelFunction::Box => "box",
            KernelFunction::Gaussian => "gaussian",
            KernelFunction::Triangle => "triangle",
            KernelFunction::Epanechnikov => "epanechnikov",
            KernelFunction::Tricube => "tricube",
        }
    }

    /// Returns `true` if every window member receives the same weight.
    #[inline]
    pub const fn is_uniform(&self) -> bool {
        matches!(self, KernelFunction::Box)
    }

    /// Compute the weight K(u) for a normalized distance `u = d / radius`.
    ///
    /// Values of `|u|` beyond 1 are clamped to the window edge.
    #[inline]
    pub fn compute_weight<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs().min(T::one());

        match self {
            KernelFunction::Box => T::one(),

            KernelFunction::Gaussian => {
                let cutoff = T::from(GAUSSIAN_CUTOFF).unwrap_or(T::one());
                let z = abs_u * cutoff;
                (-(z * z) / (T::one() + T::one())).exp()
            }

            KernelFunction::Triangle => T::one() - abs_u,

            KernelFunction::Epanechnikov => T::one() - abs_u * abs_u,

            KernelFunction::Tricube => {
                let tmp = T::one() - abs_u * abs_u * abs_u;
                tmp * tmp * tmp
            }
        }
    }
}

impl Display for KernelFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for KernelFunction {
    type Err = SmootherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let matches = |candidate: &str| name.eq_ignore_ascii_case(candidate);

        if matches("box") || matches("uniform") {
            Ok(KernelFunction::Box)
        } else if matches("gaussian") || matches("normal") {
            Ok(KernelFunction::Gaussian)
        } else if matches("triangle") || matches("triangular") {
            Ok(KernelFunction::Triangle)
        } else if matches("epanechnikov") {
            Ok(KernelFunction::Epanechnikov)
        } else if matches("tricube") {
            Ok(KernelFunction::Tricube)
        } else {
            Err(SmootherError::UnknownKernel(s.to_string()))
        }
    }
}

// ============================================================================
// Kernel Selector
// ============================================================================

/// Caller-supplied weight function `(xi, xj) -> weight`.
///
/// `xi` is the x of the point being smoothed, `xj` the x of its neighbor.
pub type CustomKernelFn<T> = Arc<dyn Fn(T, T) -> T + Send + Sync>;

/// Kernel selector: a named preset or a custom weight function.
#[derive(Clone)]
pub enum Kernel<T> {
    /// Named preset evaluated on the normalized distance.
    Preset(KernelFunction),

    /// Custom weight function of the two x positions.
    Custom(CustomKernelFn<T>),
}

impl<T> Default for Kernel<T> {
    fn default() -> Self {
        Kernel::Preset(KernelFunction::default())
    }
}

impl<T> From<KernelFunction> for Kernel<T> {
    fn from(preset: KernelFunction) -> Self {
        Kernel::Preset(preset)
    }
}

impl<T> Debug for Kernel<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Kernel::Preset(preset) => write!(f, "Kernel::Preset({preset:?})"),
            Kernel::Custom(_) => write!(f, "Kernel::Custom"),
        }
    }
}

impl<T: Float> Kernel<T> {
    /// Wrap a custom weight function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        Kernel::Custom(Arc::new(f))
    }

    /// Get the name of the kernel (`"custom"` for functions).
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Preset(preset) => preset.name(),
            Kernel::Custom(_) => "custom",
        }
    }

    /// Resolve the kernel against a window radius.
    ///
    /// A radius of zero only admits co-located points, so presets are then
    /// evaluated at distance 0.
    #[inline]
    pub fn resolve(&self, radius: T) -> ResolvedKernel<'_, T> {
        let inv_radius = if radius > T::zero() {
            T::one() / radius
        } else {
            T::zero()
        };
        ResolvedKernel {
            kernel: self,
            inv_radius,
        }
    }
}

// ============================================================================
// Resolved Evaluator
// ============================================================================

/// Kernel bound to a radius, exposing a uniform `weight(xi, xj)`.
pub struct ResolvedKernel<'a, T> {
    kernel: &'a Kernel<T>,
    inv_radius: T,
}

impl<T: Float> ResolvedKernel<'_, T> {
    /// Returns `true` if all window members share the same weight.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        matches!(self.kernel, Kernel::Preset(preset) if preset.is_uniform())
    }

    /// Weight of neighbor `xj` when smoothing at `xi`.
    #[inline]
    pub fn weight(&self, xi: T, xj: T) -> T {
        match self.kernel {
            Kernel::Preset(preset) => preset.compute_weight((xi - xj).abs() * self.inv_radius),
            Kernel::Custom(f) => f(xi, xj),
        }
    }
}
