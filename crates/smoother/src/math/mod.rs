//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric building blocks of the smoother:
//! - Kernel functions for distance-based weighting
//! - Bandwidth resolution (absolute or density-relative)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel (weight) functions.
pub mod kernel;

/// Window radius from width and data density.
pub mod bandwidth;
