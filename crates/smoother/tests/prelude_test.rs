//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types and traits
//! for convenient usage of the smoother API.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Complete workflows work with prelude imports

use kernel_smoother::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the builder, record and result types are usable.
#[test]
fn test_prelude_imports() {
    let data = vec![Point::new(1.0, 2.0), Point::new(2.0, 4.0)];

    let result: Result<SmoothResult<f64>, SmootherError> =
        Smoother::new().build().and_then(|s| s.fit(&data));

    assert!(result.is_ok(), "Basic fit should work with prelude imports");
}

/// Test kernel selectors are available.
#[test]
fn test_prelude_kernels() {
    let _ = Smoother::<Point<f64>, f64>::new().kernel(KernelFunction::Gaussian);
    let _ = Smoother::<Point<f64>, f64>::new().kernel(Kernel::custom(|_: f64, _: f64| 1.0));
    let _ = Smoother::<Point<f64>, f64>::new().kernel_name("tricube");
}

/// Test accessors and the field trait are available.
#[test]
fn test_prelude_accessors() {
    let x: Accessor<Point<f64>, f64> = Accessor::field("x");
    let y: Accessor<Point<f64>, f64> = Accessor::function(|p: &Point<f64>| p.y);

    assert_eq!(Fields::<f64>::field(&Point::new(3.0, 4.0), "y"), Some(4.0));
    assert!(Smoother::for_records().x(x).y(y).build().is_ok());
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test a full workflow from a stored configuration.
#[test]
fn test_prelude_config_workflow() {
    let config = SmootherConfig {
        kernel: "gaussian".to_string(),
        width: 2.0,
        absolute: true,
        ..Default::default()
    };
    let smoother: KernelSmoother<Point<f64>, f64> =
        Smoother::from_config(&config).build().unwrap();

    let mut data: Vec<Point<f64>> = (0..5).map(|i| Point::new(i as f64, 1.0)).collect();
    let result = smoother.apply(&mut data, |v, p, _| p.y = v).unwrap();

    assert_eq!(result.mode, BandwidthMode::Absolute);
    assert!(data.iter().all(|p| (p.y - 1.0).abs() < 1e-12));
}
