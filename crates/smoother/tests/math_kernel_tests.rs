#![cfg(feature = "dev")]
//! Tests for kernel weight functions.
//!
//! These tests verify the kernel layer:
//! - Preset names, parsing and metadata
//! - Weight values at specific normalized distances
//! - Resolution of presets and custom functions into `weight(xi, xj)`
//!
//! ## Test Organization
//!
//! 1. **Kernel Metadata** - Names, parsing, uniformity
//! 2. **Weight Computation** - Value tests at specific points
//! 3. **Mathematical Properties** - Symmetry, monotonicity, clamping
//! 4. **Resolved Kernels** - Radius scaling and custom functions

use approx::assert_relative_eq;

use kernel_smoother::internals::math::kernel::{GAUSSIAN_CUTOFF, Kernel, KernelFunction};
use kernel_smoother::internals::primitives::errors::SmootherError;

// ============================================================================
// Kernel Metadata Tests
// ============================================================================

/// Test preset names round-trip through parsing.
#[test]
fn test_kernel_names_round_trip() {
    for kernel in KernelFunction::ALL {
        let parsed: KernelFunction = kernel.name().parse().unwrap();
        assert_eq!(parsed, kernel);
        assert_eq!(format!("{}", kernel), kernel.name());
    }
}

/// Test the default kernel is box.
#[test]
fn test_default_kernel() {
    assert_eq!(KernelFunction::default(), KernelFunction::Box);
    assert_eq!(Kernel::<f64>::default().name(), "box");
}

/// Test unknown names produce a configuration error carrying the name.
#[test]
fn test_parse_unknown() {
    let err = "hann".parse::<KernelFunction>().unwrap_err();
    assert_eq!(err, SmootherError::UnknownKernel("hann".to_string()));
    assert!(format!("{}", err).contains("hann"));
}

/// Test only the box kernel is uniform.
#[test]
fn test_uniformity() {
    for kernel in KernelFunction::ALL {
        assert_eq!(kernel.is_uniform(), kernel == KernelFunction::Box);
    }
}

// ============================================================================
// Weight Computation Tests
// ============================================================================

/// Test every preset weighs the center at exactly one.
#[test]
fn test_center_weight_is_one() {
    for kernel in KernelFunction::ALL {
        assert_eq!(kernel.compute_weight(0.0_f64), 1.0, "{}", kernel);
    }
}

/// Test specific values.
#[test]
fn test_weight_values() {
    assert_relative_eq!(KernelFunction::Box.compute_weight(0.9_f64), 1.0);
    assert_relative_eq!(KernelFunction::Triangle.compute_weight(0.25_f64), 0.75);
    assert_relative_eq!(KernelFunction::Epanechnikov.compute_weight(0.5_f64), 0.75);
    assert_relative_eq!(
        KernelFunction::Tricube.compute_weight(0.5_f64),
        (1.0_f64 - 0.125).powi(3)
    );
}

/// Test the Gaussian uses a third of the radius as its standard deviation.
#[test]
fn test_gaussian_scale() {
    for d in [0.0_f64, 0.5, 1.0, 2.0, 3.0] {
        let u = d / GAUSSIAN_CUTOFF;
        assert_relative_eq!(
            KernelFunction::Gaussian.compute_weight(u),
            (-0.5 * d * d).exp(),
            max_relative = 1e-12
        );
    }
}

// ============================================================================
// Mathematical Properties Tests
// ============================================================================

/// Test kernels are symmetric and non-increasing in |u|.
#[test]
fn test_symmetry_and_monotonicity() {
    for kernel in KernelFunction::ALL {
        let mut prev = kernel.compute_weight(0.0_f64);
        for step in 1..=10 {
            let u = step as f64 / 10.0;
            let w = kernel.compute_weight(u);
            assert_relative_eq!(w, kernel.compute_weight(-u));
            assert!(w <= prev, "{} increases at u={}", kernel, u);
            assert!(w >= 0.0);
            prev = w;
        }
    }
}

/// Test distances past the edge are clamped to the edge.
#[test]
fn test_clamped_beyond_edge() {
    for kernel in KernelFunction::ALL {
        assert_eq!(
            kernel.compute_weight(5.0_f64),
            kernel.compute_weight(1.0_f64)
        );
    }
}

// ============================================================================
// Resolved Kernel Tests
// ============================================================================

/// Test presets are evaluated on distance over radius.
#[test]
fn test_resolved_preset_scaling() {
    let kernel: Kernel<f64> = KernelFunction::Triangle.into();
    let resolved = kernel.resolve(4.0);

    assert!(!resolved.is_uniform());
    assert_relative_eq!(resolved.weight(10.0, 11.0), 0.75);
    assert_relative_eq!(resolved.weight(10.0, 8.0), 0.5);
}

/// Test custom functions receive the raw positions.
#[test]
fn test_resolved_custom() {
    let kernel = Kernel::custom(|xi: f64, xj: f64| xi * 10.0 + xj);
    let resolved = kernel.resolve(1.0);

    assert_eq!(kernel.name(), "custom");
    assert!(!resolved.is_uniform());
    assert_eq!(resolved.weight(2.0, 3.0), 23.0);
    assert_eq!(format!("{:?}", kernel), "Kernel::Custom");
}

/// Test the box kernel resolves to a uniform evaluator.
#[test]
fn test_resolved_box() {
    let kernel = Kernel::<f64>::Preset(KernelFunction::Box);
    let resolved = kernel.resolve(0.5);

    assert!(resolved.is_uniform());
    assert_eq!(resolved.weight(0.0, 0.4), 1.0);
}

/// Test a zero radius evaluates presets at distance 0.
#[test]
fn test_resolved_zero_radius() {
    for preset in KernelFunction::ALL {
        let kernel = Kernel::<f64>::Preset(preset);
        let resolved = kernel.resolve(0.0);
        assert_eq!(resolved.weight(3.0, 3.0), 1.0, "{}", preset);
    }
}
