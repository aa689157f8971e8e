//! High-level API for kernel smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! collects accessors, kernel and bandwidth settings, and produces an
//! immutable [`KernelSmoother`] that can be run on any number of datasets.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every option.
//! * **Validated**: Errors are deferred while chaining and raised by `build()`.
//! * **Two-phase delivery**: `apply` computes every value before the first
//!   setter call, so a setter that rewrites y cannot affect pending windows.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SmootherBuilder`] via `Smoother::new()` (records with named
//!    fields) or `Smoother::with_accessors(x, y)` (any record type).
//! 2. Chain configuration methods (`.kernel()`, `.width()`, `.absolute()`, ...).
//! 3. Call `.build()` and run `.fit()`, `.smooth()`, `.apply()` or `.fit_xy()`.
//!
//! ### Defaults
//!
//! | option      | default    |
//! |-------------|------------|
//! | x / y       | fields `"x"` / `"y"` |
//! | kernel      | box        |
//! | width       | 1          |
//! | absolute    | `false`    |
//! | normalize   | `true`     |
//! | sorted      | `false`    |

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{Debug, Formatter, Result as FmtResult};
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::executor::{SmoothConfig, SmoothExecutor};
use crate::engine::validator::Validator;
use crate::primitives::accessor::Accessor;
use crate::primitives::record::Fields;
use crate::primitives::sorting::{assume_sorted, sort_by_x, unsort};

// Publicly re-exported types
pub use crate::engine::output::SmoothResult;
pub use crate::math::bandwidth::BandwidthMode;
pub use crate::math::kernel::{CustomKernelFn, Kernel, KernelFunction};
pub use crate::primitives::errors::SmootherError;
pub use crate::primitives::record::Point;

// ============================================================================
// Plain Configuration
// ============================================================================

/// Plain-data smoother configuration.
///
/// Kernels are named and accessors are field names, so the configuration can
/// be stored or deserialized. Resolve it with [`SmootherBuilder::from_config`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmootherConfig {
    /// Field holding the independent coordinate.
    pub x: String,

    /// Field holding the value to smooth.
    pub y: String,

    /// Kernel name (`box`, `gaussian`, `triangle`, `epanechnikov`, `tricube`).
    pub kernel: String,

    /// Bandwidth.
    pub width: f64,

    /// Interpret `width` as a literal x-distance.
    pub absolute: bool,

    /// Return weighted averages instead of raw weighted sums.
    pub normalize: bool,

    /// Data is already ascending by x.
    pub sorted: bool,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            x: String::from("x"),
            y: String::from("y"),
            kernel: String::from(KernelFunction::Box.name()),
            width: 1.0,
            absolute: false,
            normalize: true,
            sorted: false,
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a kernel smoother.
pub struct SmootherBuilder<R, T> {
    /// Explicit x accessor.
    pub(crate) x: Option<Accessor<R, T>>,

    /// Explicit y accessor.
    pub(crate) y: Option<Accessor<R, T>>,

    /// Field accessors used when no explicit accessor is set.
    pub(crate) default_accessors: Option<(Accessor<R, T>, Accessor<R, T>)>,

    /// Kernel selector.
    pub kernel: Option<Kernel<T>>,

    /// Bandwidth.
    pub width: Option<T>,

    /// Absolute (`true`) or density-relative (`false`) width.
    pub absolute: Option<bool>,

    /// Divide by the total weight.
    pub normalize: Option<bool>,

    /// Caller guarantees ascending x.
    pub sorted: Option<bool>,

    /// Record window sizes in the result.
    pub return_window_sizes: Option<bool>,

    /// Deferred error from configuration (e.g. unknown kernel name).
    pub(crate) deferred_error: Option<SmootherError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<R, T> Default for SmootherBuilder<R, T>
where
    R: Fields<T> + 'static,
    T: Float + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, T> SmootherBuilder<R, T>
where
    R: Fields<T> + 'static,
    T: Float + 'static,
{
    /// Create a builder reading the `"x"` and `"y"` fields of each record.
    pub fn new() -> Self {
        let mut builder = Self::for_records();
        builder.default_accessors = Some((Accessor::field("x"), Accessor::field("y")));
        builder
    }

    /// Create a builder from a plain configuration.
    pub fn from_config(config: &SmootherConfig) -> Self {
        let mut builder = Self::new()
            .x_field(&config.x)
            .y_field(&config.y)
            .kernel_name(&config.kernel)
            .absolute(config.absolute)
            .normalize(config.normalize)
            .sorted(config.sorted);

        match T::from(config.width) {
            Some(width) => builder = builder.width(width),
            None => builder.defer(SmootherError::InvalidWidth(config.width)),
        }

        builder
    }

    /// Read x from a named field.
    pub fn x_field(self, name: &str) -> Self {
        self.x(Accessor::field(name))
    }

    /// Read y from a named field.
    pub fn y_field(self, name: &str) -> Self {
        self.y(Accessor::field(name))
    }
}

impl<R, T> SmootherBuilder<R, T>
where
    R: 'static,
    T: Float + 'static,
{
    /// Create a builder for any record type from two accessor functions.
    pub fn with_accessors<FX, FY>(x: FX, y: FY) -> Self
    where
        FX: Fn(&R) -> T + Send + Sync + 'static,
        FY: Fn(&R) -> T + Send + Sync + 'static,
    {
        Self::for_records().x_fn(x).y_fn(y)
    }

    /// Create a builder with no accessors.
    ///
    /// Both `.x_fn()` (or `.x()`) and `.y_fn()` (or `.y()`) must be called
    /// before `build()`.
    pub fn for_records() -> Self {
        Self {
            x: None,
            y: None,
            default_accessors: None,
            kernel: None,
            width: None,
            absolute: None,
            normalize: None,
            sorted: None,
            return_window_sizes: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    fn defer(&mut self, err: SmootherError) {
        if self.deferred_error.is_none() {
            self.deferred_error = Some(err);
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Set the x accessor.
    pub fn x(mut self, accessor: Accessor<R, T>) -> Self {
        if self.x.is_some() {
            self.duplicate_param = Some("x");
        }
        self.x = Some(accessor);
        self
    }

    /// Set the y accessor.
    pub fn y(mut self, accessor: Accessor<R, T>) -> Self {
        if self.y.is_some() {
            self.duplicate_param = Some("y");
        }
        self.y = Some(accessor);
        self
    }

    /// Read x through a function.
    pub fn x_fn<F>(self, f: F) -> Self
    where
        F: Fn(&R) -> T + Send + Sync + 'static,
    {
        self.x(Accessor::function(f))
    }

    /// Read y through a function.
    pub fn y_fn<F>(self, f: F) -> Self
    where
        F: Fn(&R) -> T + Send + Sync + 'static,
    {
        self.y(Accessor::function(f))
    }

    // ========================================================================
    // Kernel
    // ========================================================================

    /// Set the kernel (a preset or a [`Kernel`]).
    pub fn kernel(mut self, kernel: impl Into<Kernel<T>>) -> Self {
        if self.kernel.is_some() {
            self.duplicate_param = Some("kernel");
        }
        self.kernel = Some(kernel.into());
        self
    }

    /// Set the kernel by name. Unknown names fail at `build()`.
    pub fn kernel_name(mut self, name: &str) -> Self {
        match name.parse::<KernelFunction>() {
            Ok(preset) => self.kernel(preset),
            Err(err) => {
                if self.kernel.is_some() {
                    self.duplicate_param = Some("kernel");
                }
                self.defer(err);
                self
            }
        }
    }

    /// Set a custom weight function `(xi, xj) -> weight`.
    ///
    /// The bandwidth still decides which neighbors are considered; the
    /// function only weighs them.
    pub fn kernel_fn<F>(self, f: F) -> Self
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.kernel(Kernel::custom(f))
    }

    // ========================================================================
    // Bandwidth and Flags
    // ========================================================================

    /// Set the bandwidth. Values of zero or less give self-only windows.
    ///
    /// In relative mode the width is a multiple of the full x range, so a
    /// relative width of 1 or more covers the whole data set from every point.
    pub fn width(mut self, width: T) -> Self {
        if self.width.is_some() {
            self.duplicate_param = Some("width");
        }
        self.width = Some(width);
        self
    }

    /// Interpret the width as a literal x-distance.
    pub fn absolute(mut self, absolute: bool) -> Self {
        if self.absolute.is_some() {
            self.duplicate_param = Some("absolute");
        }
        self.absolute = Some(absolute);
        self
    }

    /// Return weighted averages (`true`) or raw weighted sums (`false`).
    pub fn normalize(mut self, normalize: bool) -> Self {
        if self.normalize.is_some() {
            self.duplicate_param = Some("normalize");
        }
        self.normalize = Some(normalize);
        self
    }

    /// Declare the data already ascending by x, skipping the sort.
    pub fn sorted(mut self, sorted: bool) -> Self {
        if self.sorted.is_some() {
            self.duplicate_param = Some("sorted");
        }
        self.sorted = Some(sorted);
        self
    }

    /// Include per-point window sizes in the result.
    pub fn return_window_sizes(mut self) -> Self {
        self.return_window_sizes = Some(true);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the smoother.
    pub fn build(self) -> Result<KernelSmoother<R, T>, SmootherError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        let width = self.width.unwrap_or_else(T::one);
        Validator::validate_width(width)?;

        let (default_x, default_y) = match self.default_accessors {
            Some((x, y)) => (Some(x), Some(y)),
            None => (None, None),
        };
        let x = self
            .x
            .or(default_x)
            .ok_or(SmootherError::MissingAccessor { axis: "x" })?;
        let y = self
            .y
            .or(default_y)
            .ok_or(SmootherError::MissingAccessor { axis: "y" })?;

        Ok(KernelSmoother {
            x,
            y,
            sorted: self.sorted.unwrap_or(false),
            config: SmoothConfig {
                kernel: self.kernel.unwrap_or_default(),
                width,
                mode: BandwidthMode::from_absolute(self.absolute.unwrap_or(false)),
                normalize: self.normalize.unwrap_or(true),
                return_window_sizes: self.return_window_sizes.unwrap_or(false),
            },
        })
    }
}

impl<R, T: Copy> Clone for SmootherBuilder<R, T> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
            default_accessors: self.default_accessors.clone(),
            kernel: self.kernel.clone(),
            width: self.width,
            absolute: self.absolute,
            normalize: self.normalize,
            sorted: self.sorted,
            return_window_sizes: self.return_window_sizes,
            deferred_error: self.deferred_error.clone(),
            duplicate_param: self.duplicate_param,
        }
    }
}

impl<R, T: Debug> Debug for SmootherBuilder<R, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SmootherBuilder")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("kernel", &self.kernel)
            .field("width", &self.width)
            .field("absolute", &self.absolute)
            .field("normalize", &self.normalize)
            .field("sorted", &self.sorted)
            .field("return_window_sizes", &self.return_window_sizes)
            .finish()
    }
}

// ============================================================================
// Smoother
// ============================================================================

/// Configured kernel smoother.
///
/// Immutable and reusable; each call allocates its own working buffers, so a
/// single instance may be shared between threads.
pub struct KernelSmoother<R, T> {
    x: Accessor<R, T>,
    y: Accessor<R, T>,
    sorted: bool,
    config: SmoothConfig<T>,
}

impl<R, T: Float> KernelSmoother<R, T> {
    /// Smooth a collection of records.
    ///
    /// Values are returned in the original order of `records`.
    pub fn fit(&self, records: &[R]) -> Result<SmoothResult<T>, SmootherError> {
        let x = self.x.extract(records)?;
        let y = self.y.extract(records)?;
        self.fit_coordinates(x, y)
    }

    /// Smooth a collection of records, returning only the values.
    pub fn smooth(&self, records: &[R]) -> Result<Vec<T>, SmootherError> {
        self.fit(records).map(SmoothResult::into_values)
    }

    /// Smooth parallel coordinate slices, bypassing the accessors.
    pub fn fit_xy(&self, x: &[T], y: &[T]) -> Result<SmoothResult<T>, SmootherError> {
        Validator::validate_lengths(x.len(), y.len())?;
        self.fit_coordinates(x.to_vec(), y.to_vec())
    }

    /// Smooth `records` and hand each value to `setter(value, record, index)`.
    ///
    /// All values are computed before the first call. The setter runs once
    /// per record, in original order.
    pub fn apply<F>(&self, records: &mut [R], mut setter: F) -> Result<SmoothResult<T>, SmootherError>
    where
        F: FnMut(T, &mut R, usize),
    {
        let result = self.fit(records)?;
        for (index, (record, &value)) in records.iter_mut().zip(result.y.iter()).enumerate() {
            setter(value, record, index);
        }
        Ok(result)
    }

    /// Smooth `records` and call `setter(value, index, records)` once per record.
    ///
    /// The setter sees the whole collection and may modify any record. All
    /// values are computed before the first call.
    pub fn apply_with<F>(
        &self,
        records: &mut [R],
        mut setter: F,
    ) -> Result<SmoothResult<T>, SmootherError>
    where
        F: FnMut(T, usize, &mut [R]),
    {
        let result = self.fit(records)?;
        for (index, &value) in result.y.iter().enumerate() {
            setter(value, index, &mut *records);
        }
        Ok(result)
    }

    /// Configured width.
    pub fn width(&self) -> T {
        self.config.width
    }

    /// Configured kernel.
    pub fn kernel(&self) -> &Kernel<T> {
        &self.config.kernel
    }

    /// Validate, sort, sweep and restore the original order.
    fn fit_coordinates(&self, x: Vec<T>, y: Vec<T>) -> Result<SmoothResult<T>, SmootherError> {
        Validator::validate_coordinates(&x)?;

        let sorted = if self.sorted {
            assume_sorted(x, y)
        } else {
            sort_by_x(x, y)
        };

        let output = SmoothExecutor::run(&sorted.x, &sorted.y, &self.config);

        let indices = &sorted.indices;
        Ok(SmoothResult {
            x: unsort(&sorted.x, indices),
            y: unsort(&output.smoothed, indices),
            bandwidth: output.radius,
            mode: self.config.mode,
            kernel: self.config.kernel.name(),
            normalized: self.config.normalize,
            window_sizes: output.window_sizes.map(|sizes| unsort(&sizes, indices)),
        })
    }
}

impl<R, T: Copy> Clone for KernelSmoother<R, T> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
            sorted: self.sorted,
            config: self.config.clone(),
        }
    }
}

impl<R, T: Debug> Debug for KernelSmoother<R, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("KernelSmoother")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("sorted", &self.sorted)
            .field("config", &self.config)
            .finish()
    }
}
