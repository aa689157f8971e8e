//! Sorting utilities for smoother input data.
//!
//! ## Purpose
//!
//! This module orders the extracted coordinates by x and keeps the
//! permutation needed to report results in the caller's original order.
//!
//! ## Design notes
//!
//! * **Indices, not records**: Only `(x, index)` pairs are sorted; records are never moved.
//! * **Stability**: Equal x-values keep their input order.
//! * **Hint**: `assume_sorted` trusts the caller and builds the identity permutation.
//!
//! ## Key concepts
//!
//! ### Sort-Process-Unsort Pattern
//! 1. **Sort**: Coordinates are sorted by x, creating an index mapping.
//! 2. **Process**: Windows and weights are computed on the sorted sequence.
//! 3. **Unsort**: Results are mapped back to original indices in O(n) time.
//!
//! ## Invariants
//!
//! * The index mapping is a valid permutation of `0..n`.
//! * `indices[sorted_pos] = original_pos`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Coordinates in ascending x order.
pub struct SortedData<T> {
    /// Sorted x-coordinates.
    pub x: Vec<T>,

    /// Y-coordinates reordered to match sorted x-coordinates.
    pub y: Vec<T>,

    /// Index mapping where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort coordinates by x in ascending order.
///
/// Already-sorted input takes a fast path that skips the sort entirely.
pub fn sort_by_x<T: Float>(x: Vec<T>, y: Vec<T>) -> SortedData<T> {
    if x.windows(2).all(|w| w[0] <= w[1]) {
        return assume_sorted(x, y);
    }

    let mut pairs: Vec<(T, usize)> = x.iter().enumerate().map(|(i, &xi)| (xi, i)).collect();

    // Stable sort keeps ties in input order
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    SortedData {
        x: pairs.iter().map(|p| p.0).collect(),
        y: pairs.iter().map(|p| y[p.1]).collect(),
        indices: pairs.iter().map(|p| p.1).collect(),
    }
}

/// Treat the coordinates as already sorted (caller's guarantee).
///
/// No check is performed. If the guarantee is wrong, the smoothed values are
/// unspecified but the original order is still restored.
#[inline]
pub fn assume_sorted<T>(x: Vec<T>, y: Vec<T>) -> SortedData<T> {
    let n = x.len();
    SortedData {
        x,
        y,
        indices: (0..n).collect(),
    }
}

/// Map sorted results back to the original input order in O(n) time.
pub fn unsort<V: Copy>(sorted_values: &[V], indices: &[usize]) -> Vec<V> {
    let mut result = sorted_values.to_vec();
    for (sorted_idx, &orig_idx) in indices.iter().enumerate() {
        result[orig_idx] = sorted_values[sorted_idx];
    }
    result
}
