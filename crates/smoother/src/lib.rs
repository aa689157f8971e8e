//! # kernel-smoother: kernel-weighted local averaging for Rust
//!
//! Given scattered `(x, y)` observations, this crate replaces every `y` with
//! a weighted average of the `y` values of its neighbors along `x`. Which
//! neighbors count is set by a bandwidth (absolute, or relative to the data's
//! density); how much each one counts is set by a kernel (box, Gaussian,
//! other presets, or any function of the two positions).
//!
//! ## Quick Start
//!
//! ```rust
//! use kernel_smoother::prelude::*;
//!
//! let data: Vec<Point<f64>> = (0..10)
//!     .map(|i| Point::new(i as f64, (i * i) as f64))
//!     .collect();
//!
//! // Average each point with its direct neighbors
//! let smoother = Smoother::new()
//!     .kernel(KernelFunction::Box)
//!     .width(1.5)
//!     .absolute(true)
//!     .build()?;
//!
//! let values = smoother.smooth(&data)?;
//! assert_eq!(values.len(), data.len());
//! assert!((values[1] - (0.0 + 1.0 + 4.0) / 3.0).abs() < 1e-12);
//! # Result::<(), SmootherError>::Ok(())
//! ```
//!
//! ### Custom records and in-place updates
//!
//! ```rust
//! use kernel_smoother::prelude::*;
//!
//! struct Sample {
//!     time: f64,
//!     level: f64,
//! }
//!
//! let mut samples: Vec<Sample> = (0..50)
//!     .map(|i| Sample { time: i as f64, level: if i == 25 { 1.0 } else { 0.0 } })
//!     .collect();
//!
//! let smoother = Smoother::with_accessors(|s: &Sample| s.time, |s: &Sample| s.level)
//!     .kernel(KernelFunction::Gaussian)
//!     .width(6.0)
//!     .absolute(true)
//!     .build()?;
//!
//! // Every value is computed before the first write
//! smoother.apply(&mut samples, |value, sample, _index| sample.level = value)?;
//!
//! assert!(samples[25].level > samples[26].level);
//! assert_eq!(samples[10].level, 0.0);
//! # Result::<(), SmootherError>::Ok(())
//! ```
//!
//! ### Custom kernels
//!
//! ```rust
//! use kernel_smoother::prelude::*;
//!
//! let x = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = [0.0, 0.0, 1.0, 0.0, 0.0];
//!
//! let smoother = Smoother::<Point<f64>, f64>::new()
//!     .kernel_fn(|xi: f64, xj: f64| (-(xi - xj).abs()).exp())
//!     .width(1.0)
//!     .absolute(true)
//!     .normalize(false)
//!     .build()?;
//!
//! let result = smoother.fit_xy(&x, &y)?;
//! assert!((result.y[1] - (-1.0_f64).exp()).abs() < 1e-12);
//! assert_eq!(result.y[0], 0.0);
//! # Result::<(), SmootherError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Smoothing itself cannot fail on degenerate data: empty input yields an
//! empty result, widths of zero or less give self-only windows, and identical
//! x-values collapse to a common average. Errors are reserved for
//! misconfiguration, such as an unknown kernel name or a non-finite width,
//! and for records whose named field is missing.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! kernel-smoother = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - kernels and bandwidth resolution.
mod math;

// Layer 3: Engine - window sweep, aggregation and validation.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        BandwidthMode, Kernel, KernelFunction, KernelSmoother, Point, SmoothResult,
        SmootherBuilder as Smoother, SmootherConfig, SmootherError,
    };
    pub use crate::primitives::accessor::Accessor;
    pub use crate::primitives::record::Fields;
}

pub use api::{
    BandwidthMode, CustomKernelFn, Kernel, KernelFunction, KernelSmoother, Point, SmoothResult,
    SmootherBuilder, SmootherConfig, SmootherError,
};
pub use primitives::accessor::Accessor;
pub use primitives::record::Fields;

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
