#![cfg(feature = "dev")]
//! Tests for bandwidth resolution, validation and the execution engine.
//!
//! ## Test Organization
//!
//! 1. **Bandwidth** - Density unit and radius resolution
//! 2. **Validator** - Accepted and rejected inputs
//! 3. **Executor** - Aggregation on pre-sorted coordinates

use approx::assert_relative_eq;

use kernel_smoother::internals::engine::executor::{SmoothConfig, SmoothExecutor};
use kernel_smoother::internals::engine::validator::Validator;
use kernel_smoother::internals::math::bandwidth::{density_unit, effective_radius, BandwidthMode};
use kernel_smoother::internals::math::kernel::{Kernel, KernelFunction};
use kernel_smoother::internals::primitives::errors::SmootherError;
use kernel_smoother::internals::primitives::window::Window;

fn config(kernel: Kernel<f64>, width: f64, mode: BandwidthMode, normalize: bool) -> SmoothConfig<f64> {
    SmoothConfig {
        kernel,
        width,
        mode,
        normalize,
        return_window_sizes: true,
    }
}

// ============================================================================
// Bandwidth Tests
// ============================================================================

/// Test the density unit is the x extent, independent of order.
#[test]
fn test_density_unit() {
    assert_eq!(density_unit(&[2.0, -1.0, 5.0, 0.0]), 6.0);
    assert_eq!(density_unit::<f64>(&[]), 0.0);
    assert_eq!(density_unit(&[3.0, 3.0]), 0.0);
}

/// Test radius resolution in both modes.
#[test]
fn test_effective_radius() {
    let x = [0.0, 4.0];

    assert_eq!(effective_radius(1.5, BandwidthMode::Absolute, &x), 1.5);
    assert_eq!(effective_radius(0.5, BandwidthMode::Relative, &x), 2.0);
    assert_eq!(effective_radius(0.0, BandwidthMode::Relative, &x), 0.0);
    assert_eq!(effective_radius(-2.0, BandwidthMode::Relative, &x), -2.0);
    assert_eq!(effective_radius(-2.0, BandwidthMode::Absolute, &x), -2.0);
}

/// Test mode helpers.
#[test]
fn test_bandwidth_mode() {
    assert_eq!(BandwidthMode::default(), BandwidthMode::Relative);
    assert!(BandwidthMode::from_absolute(true).is_absolute());
    assert!(!BandwidthMode::from_absolute(false).is_absolute());
    assert_eq!(format!("{}", BandwidthMode::Absolute), "absolute");
}

// ============================================================================
// Validator Tests
// ============================================================================

/// Test length checks.
#[test]
fn test_validate_lengths() {
    assert!(Validator::validate_lengths(3, 3).is_ok());
    assert_eq!(
        Validator::validate_lengths(3, 2),
        Err(SmootherError::MismatchedInputs { x_len: 3, y_len: 2 })
    );
}

/// Test non-finite x-coordinates are rejected with their position.
#[test]
fn test_validate_coordinates() {
    assert!(Validator::validate_coordinates::<f64>(&[]).is_ok());
    assert!(Validator::validate_coordinates(&[1.0, -3.0]).is_ok());

    match Validator::validate_coordinates(&[1.0, f64::INFINITY]) {
        Err(SmootherError::InvalidNumericValue(msg)) => assert!(msg.starts_with("x[1]")),
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Test any finite width is accepted.
#[test]
fn test_validate_width() {
    for width in [-5.0, 0.0, 0.1, 1e9] {
        assert!(Validator::validate_width(width).is_ok());
    }
    assert_eq!(
        Validator::validate_width(f64::NEG_INFINITY),
        Err(SmootherError::InvalidWidth(f64::NEG_INFINITY))
    );
}

/// Test duplicate detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("kernel")),
        Err(SmootherError::DuplicateParameter {
            parameter: "kernel"
        })
    );
}

// ============================================================================
// Executor Tests
// ============================================================================

/// Test empty input yields empty output.
#[test]
fn test_run_empty() {
    let cfg = config(Kernel::default(), 1.0, BandwidthMode::Relative, true);
    let out = SmoothExecutor::run(&[], &[], &cfg);

    assert!(out.smoothed.is_empty());
    assert_eq!(out.window_sizes, Some(vec![]));
}

/// Test the box kernel computes window means.
#[test]
fn test_run_box_mean() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [4.0, 8.0, 0.0, 2.0];
    let cfg = config(Kernel::default(), 1.0, BandwidthMode::Absolute, true);
    let out = SmoothExecutor::run(&x, &y, &cfg);

    assert_eq!(out.radius, 1.0);
    assert_eq!(out.window_sizes, Some(vec![2, 3, 3, 2]));
    assert_relative_eq!(out.smoothed[0], 6.0);
    assert_relative_eq!(out.smoothed[1], 4.0);
    assert_relative_eq!(out.smoothed[2], 10.0 / 3.0);
    assert_relative_eq!(out.smoothed[3], 1.0);
}

/// Test the triangle kernel weighs neighbors by distance.
#[test]
fn test_run_triangle_weights() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 3.0, 6.0];
    let cfg = config(
        KernelFunction::Triangle.into(),
        2.0,
        BandwidthMode::Absolute,
        true,
    );
    let out = SmoothExecutor::run(&x, &y, &cfg);

    // Weights at x=0: 1, 0.5, 0
    assert_relative_eq!(out.smoothed[0], 1.0);
    assert_relative_eq!(out.smoothed[1], 3.0);
    assert_relative_eq!(out.smoothed[2], 5.0);
}

/// Test a zero width averages co-located points without a kernel.
#[test]
fn test_run_zero_width() {
    let x = [1.0, 1.0, 2.0];
    let y = [2.0, 4.0, 9.0];
    let cfg = config(
        Kernel::custom(|_: f64, _: f64| 0.0),
        0.0,
        BandwidthMode::Absolute,
        false,
    );
    let out = SmoothExecutor::run(&x, &y, &cfg);

    assert_eq!(out.smoothed, vec![3.0, 3.0, 9.0]);
}

/// Test a positive width over a single x-value still evaluates the kernel.
#[test]
fn test_run_collapsed_radius() {
    let x = [2.0, 2.0];
    let y = [1.0, 3.0];
    let cfg = config(
        KernelFunction::Gaussian.into(),
        1.0,
        BandwidthMode::Relative,
        false,
    );
    let out = SmoothExecutor::run(&x, &y, &cfg);

    assert_eq!(out.radius, 0.0);
    assert_eq!(out.smoothed, vec![4.0, 4.0]);
    assert_eq!(out.window_sizes, Some(vec![2, 2]));
}

/// Test the aggregation helpers directly.
#[test]
fn test_weighted_average_helpers() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 2.0, 3.0];
    let window = Window { left: 0, right: 2 };

    let kernel = Kernel::<f64>::Preset(KernelFunction::Box);
    let resolved = kernel.resolve(5.0);
    assert_eq!(
        SmoothExecutor::weighted_average(&x, &y, window, 1, &resolved, false),
        6.0
    );
    assert_eq!(
        SmoothExecutor::weighted_average(&x, &y, window, 1, &resolved, true),
        2.0
    );

    let zero = Kernel::custom(|_: f64, _: f64| 0.0);
    let resolved = zero.resolve(5.0);
    assert_eq!(
        SmoothExecutor::weighted_average(&x, &y, window, 2, &resolved, true),
        3.0
    );
    assert_eq!(
        SmoothExecutor::weighted_average(&x, &y, window, 2, &resolved, false),
        0.0
    );

    assert_eq!(SmoothExecutor::window_mean(&y, Window { left: 1, right: 2 }), 2.5);
}
