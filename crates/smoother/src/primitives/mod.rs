//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions, data structures, and
//! utility functions used throughout the crate. It has zero internal
//! dependencies outside itself.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Record shapes and named-field lookup.
pub mod record;

/// Coordinate accessors.
pub mod accessor;

/// Sorting utilities.
pub mod sorting;

/// Windowing logic.
pub mod window;

/// Shared error types.
pub mod errors;
