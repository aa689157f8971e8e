//! Bandwidth resolution.
//!
//! ## Purpose
//!
//! This module turns the configured width into the radius used for window
//! membership. In absolute mode the width already is an x-distance. In
//! relative mode it is scaled by a density unit measured on the data, so the
//! same width gives comparable windows whatever the scale of x.
//!
//! ## Key concepts
//!
//! * **Density unit**: The x extent of the data, `max(x) - min(x)`. A relative
//!   width of 1 therefore reaches from any point to every other point, and the
//!   box kernel returns the global mean. Local smoothing needs widths well
//!   below 1, e.g. `0.05` for windows spanning a twentieth of the range.
//! * **Degenerate data**: When every x is equal the unit is 0 and every radius
//!   collapses to 0, which still admits all co-located points.
//! * **Negative widths**: Always resolve to a negative radius (self-only windows),
//!   in either mode.
//!
//! ## Non-goals
//!
//! * This module does not estimate an optimal bandwidth.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interpretation of the configured width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BandwidthMode {
    /// Width is a multiple of the data's density unit.
    #[default]
    Relative,

    /// Width is a literal x-distance.
    Absolute,
}

impl BandwidthMode {
    /// Select the mode from an `absolute` flag.
    #[inline]
    pub const fn from_absolute(absolute: bool) -> Self {
        if absolute {
            BandwidthMode::Absolute
        } else {
            BandwidthMode::Relative
        }
    }

    /// Returns `true` for absolute mode.
    #[inline]
    pub const fn is_absolute(&self) -> bool {
        matches!(self, BandwidthMode::Absolute)
    }
}

impl Display for BandwidthMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            BandwidthMode::Relative => f.write_str("relative"),
            BandwidthMode::Absolute => f.write_str("absolute"),
        }
    }
}

/// Density unit of the data: the x extent.
///
/// Computed as a full min/max scan so it does not depend on the data being sorted.
pub fn density_unit<T: Float>(x: &[T]) -> T {
    let mut iter = x.iter().copied();
    let first = match iter.next() {
        Some(v) => v,
        None => return T::zero(),
    };

    let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    max - min
}

/// Resolve the configured width into the window radius.
pub fn effective_radius<T: Float>(width: T, mode: BandwidthMode, x: &[T]) -> T {
    if width < T::zero() {
        return width;
    }

    match mode {
        BandwidthMode::Absolute => width,
        BandwidthMode::Relative => width * density_unit(x),
    }
}
