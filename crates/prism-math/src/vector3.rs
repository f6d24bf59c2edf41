//! Real-valued 3D vector with the optics operations used by the tracer.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::scalar::{self, Real, Tolerance, EPS};

/// A vector in 3D space.
///
/// Equality is approximate: `a == b` holds when every component differs by
/// less than [`EPS`]. Unit length is a caller convention and is only checked
/// by [`reflection`](Self::reflection) and [`transmission`](Self::transmission).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component.
    pub x: Real,
    /// Y component.
    pub y: Real,
    /// Z component.
    pub z: Real,
}

impl Vector3 {
    /// Create a vector from three components.
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with only the x component set.
    #[inline]
    pub const fn from_x(x: Real) -> Self {
        Self::new(x, 0.0, 0.0)
    }

    /// The zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// All components at `Real::MAX`. Starting value for a running minimum.
    #[inline]
    pub const fn max() -> Self {
        Self::new(Real::MAX, Real::MAX, Real::MAX)
    }

    /// All components at positive infinity.
    #[inline]
    pub const fn infinity() -> Self {
        Self::new(Real::INFINITY, Real::INFINITY, Real::INFINITY)
    }

    /// Directed difference `end - start`.
    #[inline]
    pub fn between(start: &Vector3, end: &Vector3) -> Self {
        Self::new(end.x - start.x, end.y - start.y, end.z - start.z)
    }

    /// Component by index (0 = x, 1 = y, 2 = z).
    pub fn get(&self, index: usize) -> Result<Real> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::IndexOutOfRange { index, len: 3 }),
        }
    }

    /// Mutable component by index (0 = x, 1 = y, 2 = z).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Real> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(MathError::IndexOutOfRange { index, len: 3 }),
        }
    }

    /// Smallest absolute component.
    pub fn min_comp_abs(&self) -> Real {
        let mut a = self.x.abs();
        scalar::update_min(&mut a, self.y.abs());
        scalar::update_min(&mut a, self.z.abs());
        a
    }

    /// Squared length.
    #[inline]
    pub fn sqr(&self) -> Real {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length, the modulus `|v|`.
    ///
    /// Computed with `hypot` so components beyond `1e154` or below `1e-154`
    /// do not overflow or flush the intermediate square.
    #[inline]
    pub fn norm(&self) -> Real {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Inner product.
    #[inline]
    pub fn dot(&self, v: &Vector3) -> Real {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, v: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    /// Scale to unit length in place.
    ///
    /// # Panics
    ///
    /// Panics if the vector is zero or has a non-finite component.
    pub fn normalize(&mut self) {
        let scale = self.get_abs_max();
        assert!(
            self.is_finite() && scale > 0.0,
            "cannot normalize degenerate vector ({self}): largest component is {scale}"
        );
        // Largest component becomes +-1, so the length below is in [1, sqrt 3].
        self.x /= scale;
        self.y /= scale;
        self.z /= scale;
        *self *= 1.0 / self.sqr().sqrt();
    }

    /// Unit-length copy of this vector. Panics like [`normalize`](Self::normalize).
    #[must_use]
    pub fn get_normalized(&self) -> Vector3 {
        let mut ret = *self;
        ret.normalize();
        ret
    }

    /// Largest raw component.
    pub fn get_max(&self) -> Real {
        self.x.max(self.y.max(self.z))
    }

    /// Largest absolute component.
    pub fn get_abs_max(&self) -> Real {
        self.x.abs().max(self.y.abs().max(self.z.abs()))
    }

    /// Component-wise running minimum.
    pub fn update_min(&mut self, v: &Vector3) {
        scalar::update_min(&mut self.x, v.x);
        scalar::update_min(&mut self.y, v.y);
        scalar::update_min(&mut self.z, v.z);
    }

    /// Component-wise running maximum.
    pub fn update_max(&mut self, v: &Vector3) {
        scalar::update_max(&mut self.x, v.x);
        scalar::update_max(&mut self.y, v.y);
        scalar::update_max(&mut self.z, v.z);
    }

    /// All components within [`EPS`] of zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(EPS)
    }

    /// All components strictly inside `(-threshold, threshold)`.
    pub fn is_zero_within(&self, threshold: Real) -> bool {
        self.x.abs() < threshold && self.y.abs() < threshold && self.z.abs() < threshold
    }

    /// All components greater than [`EPS`].
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.is_positive_within(EPS)
    }

    /// All components greater than `threshold`.
    pub fn is_positive_within(&self, threshold: Real) -> bool {
        self.x > threshold && self.y > threshold && self.z > threshold
    }

    /// Every component within `tol` of the matching component of `v`.
    pub fn eq_within(&self, v: &Vector3, tol: &Tolerance) -> bool {
        tol.approx_eq(self.x, v.x) && tol.approx_eq(self.y, v.y) && tol.approx_eq(self.z, v.z)
    }

    /// No component is infinite or NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Mirror the incident direction `v` about this surface normal.
    ///
    /// `v` is the direction the ray travels toward the surface; the result
    /// leaves the surface on the same side as the normal:
    /// `v - 2 (n . v) n`.
    ///
    /// # Panics
    ///
    /// Panics unless both `self` and `v` have unit length.
    pub fn reflection(&self, v: &Vector3) -> Vector3 {
        self.assert_unit_pair(v, "reflection");
        *v - *self * (2.0 * self.dot(v))
    }

    /// Refract the incident direction `v_in` through the surface with normal `self`.
    ///
    /// `density` is the refractive index of the far side relative to the near
    /// side. Returns `None` at grazing or back-face incidence and on total
    /// internal reflection; otherwise the unit refracted direction.
    ///
    /// # Panics
    ///
    /// Panics unless both `self` and `v_in` have unit length, and unless
    /// `density` is a positive normal number.
    pub fn transmission(&self, v_in: &Vector3, density: Real) -> Option<Vector3> {
        self.assert_unit_pair(v_in, "transmission");
        assert!(
            density > 0.0 && density.is_normal(),
            "transmission: density {density} is not a positive normal number"
        );

        let eta = 1.0 / density;
        let cos1 = -self.dot(v_in);
        if cos1 < EPS {
            return None;
        }
        // Tangential part of the incident direction, |t| = sin(incidence).
        let t = *v_in + *self * cos1;
        let cos2_sq = 1.0 - eta * (eta * t.sqr());
        if !cos2_sq.is_finite() || cos2_sq < 0.0 {
            return None;
        }
        let cos2 = cos2_sq.sqrt();

        let ret = t * eta - *self * cos2;
        Some(ret.get_normalized())
    }

    /// [`transmission`](Self::transmission) with [`Vector3::infinity`] in
    /// place of `None`.
    pub fn transmission_or_infinity(&self, v_in: &Vector3, density: Real) -> Vector3 {
        self.transmission(v_in, density)
            .unwrap_or_else(Vector3::infinity)
    }

    fn assert_unit_pair(&self, v: &Vector3, op: &str) {
        assert!(
            (self.sqr() - 1.0).abs() < EPS,
            "{op}: normal ({self}) is not unit length"
        );
        assert!(
            (v.sqr() - 1.0).abs() < EPS,
            "{op}: direction ({v}) is not unit length"
        );
    }
}

impl Index<usize> for Vector3 {
    type Output = Real;

    fn index(&self, index: usize) -> &Real {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index {index} out of range (expected 0, 1 or 2)"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut Real {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index {index} out of range (expected 0, 1 or 2)"),
        }
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    #[inline]
    fn add(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, v: Vector3) {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, v: Vector3) {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Real> for Vector3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, p: Real) -> Vector3 {
        Vector3::new(self.x * p, self.y * p, self.z * p)
    }
}

impl Mul<Vector3> for Real {
    type Output = Vector3;

    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl MulAssign<Real> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, p: Real) {
        self.x *= p;
        self.y *= p;
        self.z *= p;
    }
}

// Division multiplies by the reciprocal; dividing by zero yields infinities.
impl Div<Real> for Vector3 {
    type Output = Vector3;

    #[inline]
    fn div(self, p: Real) -> Vector3 {
        self * (1.0 / p)
    }
}

impl DivAssign<Real> for Vector3 {
    #[inline]
    fn div_assign(&mut self, p: Real) {
        *self *= 1.0 / p;
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, v: &Vector3) -> bool {
        self.eq_within(v, &Tolerance::DEFAULT)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

/// Space-separated components. Honors a precision flag (`{:.3}`).
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {:.*} {:.*}", p, self.x, p, self.y, p, self.z),
            None => write!(f, "{} {} {}", self.x, self.y, self.z),
        }
    }
}

impl FromStr for Vector3 {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(MathError::ComponentCount {
                expected: 3,
                found: parts.len(),
            });
        }
        let mut out = [0.0; 3];
        for (slot, tok) in out.iter_mut().zip(&parts) {
            *slot = tok
                .parse::<Real>()
                .map_err(|_| MathError::Parse((*tok).to_string()))?;
        }
        Ok(out.into())
    }
}

impl From<[Real; 3]> for Vector3 {
    fn from(a: [Real; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [Real; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<Real>> for Vector3 {
    fn from(v: nalgebra::Vector3<Real>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<Real> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_construction() {
        assert_eq!(Vector3::default(), Vector3::zero());
        let v = Vector3::from_x(2.0);
        assert_eq!((v.x, v.y, v.z), (2.0, 0.0, 0.0));

        let p0 = Vector3::new(1.0, 2.0, 3.0);
        let p1 = Vector3::new(4.0, 0.0, -1.0);
        let d = Vector3::between(&p0, &p1);
        assert_eq!(d, Vector3::new(3.0, -2.0, -4.0));
        assert_eq!(p0 + d, p1);
    }

    #[test]
    fn test_sentinels_set_every_component() {
        let m = Vector3::max();
        assert_eq!(m.z, Real::MAX);
        let inf = Vector3::infinity();
        assert!(inf.x.is_infinite() && inf.y.is_infinite() && inf.z.is_infinite());
        assert!(!inf.is_finite());
    }

    #[test]
    fn test_index_access() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 5.0;
        assert_eq!(v.y, 5.0);

        assert_eq!(v.get(2), Ok(3.0));
        assert_eq!(
            v.get(3),
            Err(MathError::IndexOutOfRange { index: 3, len: 3 })
        );
        *v.get_mut(0).unwrap() = -1.0;
        assert_eq!(v.x, -1.0);
        assert!(v.get_mut(7).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-1.0, 0.5, 2.0);
        assert_eq!(a + b, Vector3::new(0.0, 2.5, 5.0));
        assert_eq!(a - b, Vector3::new(2.0, 1.5, 1.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 4.0, Vector3::new(0.25, 0.5, 0.75));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
        c *= 3.0;
        assert_eq!(c, Vector3::new(3.0, 6.0, 9.0));
        c /= 3.0;
        assert_eq!(c, a);
    }

    #[test]
    fn test_dot_cross() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(y.cross(&x), -z);

        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_abs_diff_eq!(a.dot(&b), 12.0);
        assert_abs_diff_eq!(a.dot(&a), a.sqr());
        assert_abs_diff_eq!(a.cross(&b).dot(&a), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_length_and_normalize() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.sqr(), 25.0);
        assert_eq!(v.norm(), 5.0);

        let n = v.get_normalized();
        assert_abs_diff_eq!(n, Vector3::new(0.6, 0.8, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-12);

        let mut w = Vector3::new(0.0, 0.0, -7.0);
        w.normalize();
        assert_eq!(w, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    #[should_panic(expected = "cannot normalize")]
    fn test_normalize_zero_panics() {
        let _ = Vector3::zero().get_normalized();
    }

    #[test]
    fn test_normalize_extreme_magnitudes() {
        let huge = Vector3::new(1e200, 1e200, 0.0);
        assert_relative_eq!(huge.norm(), 1e200 * 2f64.sqrt(), max_relative = 1e-12);
        let n = huge.get_normalized();
        assert_abs_diff_eq!(n, Vector3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0), epsilon = 1e-12);

        let tiny = Vector3::new(1e-170, 0.0, 0.0);
        assert!(tiny.norm() > 0.0);
        assert_eq!(tiny.get_normalized(), Vector3::from_x(1.0));

        let subnormal = Vector3::new(0.0, -5e-324, 0.0);
        assert_eq!(subnormal.get_normalized(), Vector3::new(0.0, -1.0, 0.0));

        let near_max = Vector3::new(Real::MAX, -Real::MAX, Real::MAX);
        assert_abs_diff_eq!(near_max.get_normalized().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "cannot normalize")]
    fn test_normalize_infinite_panics() {
        let _ = Vector3::new(1.0, Real::INFINITY, 0.0).get_normalized();
    }

    #[test]
    #[should_panic(expected = "cannot normalize")]
    fn test_normalize_nan_panics() {
        let _ = Vector3::new(Real::NAN, 1.0, 0.0).get_normalized();
    }

    #[test]
    fn test_extrema() {
        let v = Vector3::new(-4.0, 0.5, 2.0);
        assert_eq!(v.min_comp_abs(), 0.5);
        assert_eq!(v.get_max(), 2.0);
        assert_eq!(v.get_abs_max(), 4.0);
    }

    #[test]
    fn test_update_min_max_per_axis() {
        let mut lo = Vector3::max();
        let mut hi = -Vector3::max();
        for p in [
            Vector3::new(1.0, 5.0, -2.0),
            Vector3::new(3.0, -1.0, 0.0),
            Vector3::new(2.0, 2.0, 4.0),
        ] {
            lo.update_min(&p);
            hi.update_max(&p);
        }
        assert_eq!(lo, Vector3::new(1.0, -1.0, -2.0));
        assert_eq!(hi, Vector3::new(3.0, 5.0, 4.0));

        let before = lo;
        lo.update_min(&Vector3::new(10.0, 10.0, 10.0));
        assert_eq!(lo, before);
    }

    #[test]
    fn test_zero_positive_finite() {
        assert!(Vector3::new(1e-7, -1e-7, 0.0).is_zero());
        assert!(!Vector3::new(1e-3, 0.0, 0.0).is_zero());
        assert!(Vector3::new(1e-3, 0.0, 0.0).is_zero_within(1e-2));

        assert!(Vector3::new(1.0, 2.0, 3.0).is_positive());
        assert!(!Vector3::new(1.0, 0.0, 3.0).is_positive());
        assert!(!Vector3::new(1.0, 2.0, 3.0).is_positive_within(1.5));

        assert!(Vector3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vector3::new(Real::NAN, 0.0, 0.0).is_finite());
    }

    #[test]
    fn test_approximate_equality() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v, v);
        assert_eq!(v, v + Vector3::new(1e-7, -1e-7, 5e-7));
        assert_ne!(v, v + Vector3::new(0.0, 0.0, 1e-5));

        let loose = Tolerance::new(1e-3);
        assert!(v.eq_within(&(v + Vector3::new(0.0, 0.0, 1e-5)), &loose));
        assert!(!v.eq_within(&(v + Vector3::new(0.0, 0.01, 0.0)), &loose));
    }

    #[test]
    fn test_reflection() {
        let n = Vector3::new(0.0, 1.0, 0.0);
        let v = Vector3::new(1.0, -1.0, 0.0) * FRAC_1_SQRT_2;
        let r = n.reflection(&v);
        assert_eq!(r, Vector3::new(1.0, 1.0, 0.0) * FRAC_1_SQRT_2);

        // Head-on incidence bounces straight back.
        let down = Vector3::new(0.0, -1.0, 0.0);
        assert_eq!(n.reflection(&down), n);
    }

    #[test]
    #[should_panic(expected = "not unit length")]
    fn test_reflection_requires_unit_direction() {
        let n = Vector3::new(0.0, 1.0, 0.0);
        let _ = n.reflection(&Vector3::new(1.0, -1.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "normal")]
    fn test_transmission_requires_unit_normal() {
        let n = Vector3::new(0.0, 2.0, 0.0);
        let _ = n.transmission(&Vector3::new(0.0, -1.0, 0.0), 1.5);
    }

    #[test]
    fn test_transmission_equal_density_passes_straight() {
        let n = Vector3::new(0.0, 1.0, 0.0);
        let v_in = Vector3::new(0.0, -1.0, 0.0);
        assert_eq!(n.transmission(&v_in, 1.0), Some(v_in));

        let oblique = Vector3::new(1.0, -1.0, 0.0).get_normalized();
        assert_eq!(n.transmission(&oblique, 1.0), Some(oblique));
    }

    #[test]
    fn test_transmission_snell() {
        // Air into glass at 45 degrees: sin2 = sin1 / 1.5.
        let n = Vector3::new(0.0, 1.0, 0.0);
        let v_in = Vector3::new(1.0, -1.0, 0.0).get_normalized();
        let t = n.transmission(&v_in, 1.5).unwrap();
        assert_abs_diff_eq!(t.norm(), 1.0, epsilon = 1e-12);
        assert!(t.y < 0.0);
        assert_abs_diff_eq!(t.x, FRAC_1_SQRT_2 / 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_transmission_grazing_and_back_face() {
        let n = Vector3::new(0.0, 1.0, 0.0);
        let grazing = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(n.transmission(&grazing, 1.5), None);

        let from_behind = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(n.transmission(&from_behind, 1.5), None);
        assert!(!n.transmission_or_infinity(&from_behind, 1.5).is_finite());
    }

    #[test]
    fn test_transmission_total_internal_reflection() {
        // Glass into air beyond the critical angle (~41.8 degrees).
        let n = Vector3::new(0.0, 1.0, 0.0);
        let angle = 60f64.to_radians();
        let v_in = Vector3::new(angle.sin(), -angle.cos(), 0.0);
        assert_eq!(n.transmission(&v_in, 1.0 / 1.5), None);
        let sentinel = n.transmission_or_infinity(&v_in, 1.0 / 1.5);
        assert_eq!(sentinel.x, Real::INFINITY);
        assert_eq!(sentinel.z, Real::INFINITY);

        // Below the critical angle the ray still leaves.
        let angle = 30f64.to_radians();
        let v_in = Vector3::new(angle.sin(), -angle.cos(), 0.0);
        assert!(n.transmission(&v_in, 1.0 / 1.5).is_some());
    }

    #[test]
    fn test_transmission_tiny_density() {
        // eta = 1e200: head-on still passes, any tilt is beyond the critical angle.
        let n = Vector3::new(0.0, 1.0, 0.0);
        let down = Vector3::new(0.0, -1.0, 0.0);
        assert_eq!(n.transmission(&down, 1e-200), Some(down));

        let tilted = Vector3::new(1e-3, -1.0, 0.0).get_normalized();
        assert_eq!(n.transmission(&tilted, 1e-200), None);
        assert_eq!(n.transmission(&tilted, Real::MIN_POSITIVE), None);
    }

    #[test]
    fn test_transmission_huge_density() {
        // Everything bends onto the inward normal.
        let n = Vector3::new(0.0, 1.0, 0.0);
        let v_in = Vector3::new(1.0, -1.0, 0.0).get_normalized();
        let t = n.transmission(&v_in, 1e200).unwrap();
        assert_eq!(t, Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "transmission: density")]
    fn test_transmission_rejects_zero_density() {
        let n = Vector3::new(0.0, 1.0, 0.0);
        let _ = n.transmission(&Vector3::new(0.0, -1.0, 0.0), 0.0);
    }

    #[test]
    #[should_panic(expected = "transmission: density")]
    fn test_transmission_rejects_subnormal_density() {
        let n = Vector3::new(0.0, 1.0, 0.0);
        let _ = n.transmission(&Vector3::new(0.0, -1.0, 0.0), 1e-310);
    }

    #[test]
    fn test_display_and_parse() {
        let v = Vector3::new(1.0, -2.5, 3.0);
        assert_eq!(v.to_string(), "1 -2.5 3");
        assert_eq!(format!("{v:.2}"), "1.00 -2.50 3.00");
        assert_eq!("1 -2.5 3".parse::<Vector3>(), Ok(v));
        assert_eq!(
            "1 2".parse::<Vector3>(),
            Err(MathError::ComponentCount { expected: 3, found: 2 })
        );
        assert_eq!(
            "1 two 3".parse::<Vector3>(),
            Err(MathError::Parse("two".to_string()))
        );
    }

    #[test]
    fn test_nalgebra_interop() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let na: nalgebra::Vector3<f64> = v.into();
        assert_eq!(na.cross(&nalgebra::Vector3::x()).z, v.cross(&Vector3::from_x(1.0)).z);
        assert_eq!(Vector3::from(na), v);
        let arr: [Real; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }
}
