//! Windowing primitives for kernel smoothing.
//!
//! A window is the inclusive index range of sorted points lying within the
//! bandwidth radius of the current point. Because x is sorted, both bounds
//! only ever move right, so building every window costs O(n) in total.

// External dependencies
use num_traits::Float;

/// Inclusive window bounds `[left, right]` over sorted data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Window {
    /// Left boundary index (inclusive).
    pub left: usize,

    /// Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    /// Window holding only `idx`.
    #[inline]
    pub fn single(idx: usize) -> Self {
        Self {
            left: idx,
            right: idx,
        }
    }

    /// Move the bounds so the window covers every point within `radius` of `x[current]`.
    ///
    /// The window always contains `current`. A negative radius leaves only
    /// `current`; a zero radius also admits points with exactly equal x.
    #[inline]
    pub fn advance<T: Float>(&mut self, x: &[T], current: usize, radius: T) {
        let n = x.len();
        debug_assert!(current < n, "advance: current index out of bounds");

        let x_current = x[current];

        // Drop points that fell behind the left edge
        if self.left > current {
            self.left = current;
        }
        while self.left < current && x_current - x[self.left] > radius {
            self.left += 1;
        }

        // Admit points up to the right edge
        if self.right < current {
            self.right = current;
        }
        while self.right + 1 < n && x[self.right + 1] - x_current <= radius {
            self.right += 1;
        }
    }

    /// Get the number of points in the window.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }
}
