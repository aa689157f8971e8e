//! Record shapes with named numeric fields.
//!
//! ## Purpose
//!
//! The smoother never inspects a record beyond its x and y facets. Record
//! types that expose fields by name implement [`Fields`], which lets the
//! default `"x"` / `"y"` accessors (and any other field-name accessor) read
//! them without a hand-written closure.
//!
//! ## Provided implementations
//!
//! * [`Point`]: fields `"x"` and `"y"`.
//! * `(T, T)` and `[T; 2]`: `"x"` is the first element, `"y"` the second.
//! * `BTreeMap<String, T>` and (with `std`) `HashMap<String, T>`.
//! * `serde_json::Value` objects (with the `serde` feature).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, string::String};
#[cfg(feature = "std")]
use std::collections::{BTreeMap, HashMap};

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Field Lookup
// ============================================================================

/// Lookup of numeric fields by name.
pub trait Fields<T> {
    /// Return the numeric value of `name`, or `None` if the record has no such number.
    fn field(&self, name: &str) -> Option<T>;
}

// ============================================================================
// Point
// ============================================================================

/// A plain `(x, y)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T> {
    /// Independent coordinate.
    pub x: T,

    /// Dependent value.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Float> Fields<T> for Point<T> {
    #[inline]
    fn field(&self, name: &str) -> Option<T> {
        match name {
            "x" => Some(self.x),
            "y" => Some(self.y),
            _ => None,
        }
    }
}

impl<T: Float> Fields<T> for (T, T) {
    #[inline]
    fn field(&self, name: &str) -> Option<T> {
        match name {
            "x" => Some(self.0),
            "y" => Some(self.1),
            _ => None,
        }
    }
}

impl<T: Float> Fields<T> for [T; 2] {
    #[inline]
    fn field(&self, name: &str) -> Option<T> {
        match name {
            "x" => Some(self[0]),
            "y" => Some(self[1]),
            _ => None,
        }
    }
}

// ============================================================================
// Maps
// ============================================================================

impl<T: Float> Fields<T> for BTreeMap<String, T> {
    #[inline]
    fn field(&self, name: &str) -> Option<T> {
        self.get(name).copied()
    }
}

#[cfg(feature = "std")]
impl<T: Float, S: std::hash::BuildHasher> Fields<T> for HashMap<String, T, S> {
    #[inline]
    fn field(&self, name: &str) -> Option<T> {
        self.get(name).copied()
    }
}

// ============================================================================
// JSON
// ============================================================================

#[cfg(feature = "serde")]
impl<T: Float> Fields<T> for serde_json::Value {
    #[inline]
    fn field(&self, name: &str) -> Option<T> {
        self.get(name)
            .and_then(serde_json::Value::as_f64)
            .and_then(T::from)
    }
}
