//! Real scalar type, the shared epsilon, and small numeric helpers.

use std::ops::Mul;

/// The real number type used by every vector component.
pub type Real = f64;

/// Threshold for approximate-zero and approximate-equality tests.
pub const EPS: Real = 1e-6;

/// `x * x`.
#[inline]
pub fn sqr<T: Mul<Output = T> + Copy>(x: T) -> T {
    x * x
}

/// Lower `a` to `b` if `b` is smaller.
#[inline]
pub fn update_min<T: PartialOrd + Copy>(a: &mut T, b: T) {
    if b < *a {
        *a = b;
    }
}

/// Raise `a` to `b` if `b` is larger.
#[inline]
pub fn update_max<T: PartialOrd + Copy>(a: &mut T, b: T) {
    if b > *a {
        *a = b;
    }
}

/// Tolerance for approximate comparisons.
///
/// [`Tolerance::DEFAULT`] uses [`EPS`]; the `*_within` vector methods accept
/// other thresholds through this type's `linear` field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute per-component tolerance.
    pub linear: Real,
}

impl Tolerance {
    /// The crate-wide default tolerance.
    pub const DEFAULT: Self = Self { linear: EPS };

    /// Tolerance with a custom linear threshold.
    pub const fn new(linear: Real) -> Self {
        Self { linear }
    }

    /// Check if a scalar is effectively zero.
    #[inline]
    pub fn is_zero(&self, d: Real) -> bool {
        d.abs() < self.linear
    }

    /// Check if two scalars are effectively equal.
    #[inline]
    pub fn approx_eq(&self, a: Real, b: Real) -> bool {
        (a - b).abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
