//! Generic 2D vector for discrete coordinates and planar points.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use approx::AbsDiffEq;
use num_traits::{Num, Signed};
use serde::{Deserialize, Serialize};

use crate::scalar::{self, Real, EPS};

/// Element type of a [`Vector2`].
///
/// Each implementation decides its own equality: integers compare exactly,
/// reals compare within [`EPS`].
pub trait Component: Num + Signed + Copy + PartialOrd + fmt::Debug + fmt::Display {
    /// Equality used by `Vector2<Self>`.
    fn approx_eq(a: Self, b: Self) -> bool;

    /// Widen to [`Real`].
    fn to_real(self) -> Real;

    /// Narrow from [`Real`]. Integer types truncate toward zero.
    fn from_real(r: Real) -> Self;
}

macro_rules! impl_exact_component {
    ($($t:ty),*) => {$(
        impl Component for $t {
            #[inline]
            fn approx_eq(a: Self, b: Self) -> bool {
                a == b
            }

            #[inline]
            fn to_real(self) -> Real {
                self as Real
            }

            #[inline]
            fn from_real(r: Real) -> Self {
                r as $t
            }
        }
    )*};
}

macro_rules! impl_real_component {
    ($($t:ty),*) => {$(
        impl Component for $t {
            #[inline]
            fn approx_eq(a: Self, b: Self) -> bool {
                ((a - b) as Real).abs() < EPS
            }

            #[inline]
            fn to_real(self) -> Real {
                self as Real
            }

            #[inline]
            fn from_real(r: Real) -> Self {
                r as $t
            }
        }
    )*};
}

impl_exact_component!(i32, i64);
impl_real_component!(f32, f64);

/// A 2-component vector over `T`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vector2<T> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
}

/// Integer 2D vector, used as a pixel or grid coordinate.
pub type Coor = Vector2<i32>;

/// Real 2D vector, used for continuous planar points.
pub type Vec2 = Vector2<Real>;

/// Line segment between two coordinates.
pub type Line2 = (Coor, Coor);

/// Polygon as an ordered vertex list. The last vertex connects back to the first.
pub type Polygon = Vec<Coor>;

impl<T: Component> Vector2<T> {
    /// Create a vector from two components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Directed difference `end - start`.
    #[inline]
    pub fn between(start: &Self, end: &Self) -> Self {
        Self::new(end.x - start.x, end.y - start.y)
    }

    /// Inner product.
    ///
    /// Computed in `T`: for [`Coor`] the products overflow `i32` once
    /// components pass 46340 in magnitude (a debug-build panic, a wrap in
    /// release). Use [`cast`](Self::cast) to a wider type first when that
    /// range is possible.
    #[inline]
    pub fn dot(&self, v: &Self) -> T {
        self.x * v.x + self.y * v.y
    }

    /// Scalar cross product `x * v.y - y * v.x`. Same integer range limit
    /// as [`dot`](Self::dot).
    #[inline]
    pub fn cross(&self, v: &Self) -> T {
        self.x * v.y - self.y * v.x
    }

    /// Squared length, in `T`. Same integer range limit as
    /// [`dot`](Self::dot); [`sqr_real`](Self::sqr_real) has none.
    #[inline]
    pub fn sqr(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Squared length computed in [`Real`].
    #[inline]
    pub fn sqr_real(&self) -> Real {
        let (x, y) = (self.x.to_real(), self.y.to_real());
        x * x + y * y
    }

    /// Euclidean length, always real.
    #[inline]
    pub fn norm(&self) -> Real {
        self.x.to_real().hypot(self.y.to_real())
    }

    /// Mirror across the x axis: `(x, -y)`.
    #[inline]
    #[must_use]
    pub fn mirrored_y(&self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Transpose the axes: `(y, x)`.
    #[inline]
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Both components equal zero under `T`'s equality.
    pub fn is_zero(&self) -> bool {
        T::approx_eq(self.x, T::zero()) && T::approx_eq(self.y, T::zero())
    }

    /// Unit-length copy. Integer vectors truncate the result.
    ///
    /// # Panics
    ///
    /// Panics if the length is not greater than [`EPS`].
    #[must_use]
    pub fn get_normalized(&self) -> Self {
        let m = self.norm();
        assert!(m > EPS, "cannot normalize degenerate vector ({self}): length {m}");
        *self * (1.0 / m)
    }

    /// Component-wise running minimum.
    pub fn update_min(&mut self, v: &Self) {
        scalar::update_min(&mut self.x, v.x);
        scalar::update_min(&mut self.y, v.y);
    }

    /// Component-wise running maximum.
    pub fn update_max(&mut self, v: &Self) {
        scalar::update_max(&mut self.x, v.x);
        scalar::update_max(&mut self.y, v.y);
    }

    /// Convert the element type through [`Real`].
    pub fn cast<U: Component>(&self) -> Vector2<U> {
        Vector2::new(U::from_real(self.x.to_real()), U::from_real(self.y.to_real()))
    }
}

/// Iterate the edges of an implicitly closed polygon, including the edge
/// from the last vertex back to the first.
pub fn polygon_edges(poly: &[Coor]) -> impl Iterator<Item = Line2> + '_ {
    poly.iter()
        .zip(poly.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

impl<T: Component> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl<T: Component> AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, v: Self) {
        self.x = self.x + v.x;
        self.y = self.y + v.y;
    }
}

impl<T: Component> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

impl<T: Component> SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, v: Self) {
        self.x = self.x - v.x;
        self.y = self.y - v.y;
    }
}

impl<T: Component> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Component> Mul<Real> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, f: Real) -> Self {
        Self::new(
            T::from_real(self.x.to_real() * f),
            T::from_real(self.y.to_real() * f),
        )
    }
}

impl<T: Component> Div<Real> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn div(self, f: Real) -> Self {
        self * (1.0 / f)
    }
}

impl<T: Component> PartialEq for Vector2<T> {
    fn eq(&self, v: &Self) -> bool {
        T::approx_eq(self.x, v.x) && T::approx_eq(self.y, v.y)
    }
}

impl AbsDiffEq for Vector2<Real> {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
