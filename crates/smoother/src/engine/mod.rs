//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a smoothing run: validating inputs, sweeping the
//! windows over sorted coordinates, and packaging the results.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Core window sweep and weighted aggregation.
pub mod executor;

/// Result structures.
pub mod output;

/// Input and parameter validation.
pub mod validator;
