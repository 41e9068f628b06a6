//! Vec2: A pair of coordinates with component-wise arithmetic.

use std::ops::{Add, Div, Mul, Sub};

/// A 2D vector, x before y.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2<T> {
    /// Horizontal component (column).
    pub x: T,
    /// Vertical component (row).
    pub y: T,
}

/// Integer grid point.
pub type Vec2i = Vec2<i32>;
/// Floating point, used while interpolating between grid cells.
pub type Vec2f = Vec2<f64>;

impl<T> Vec2<T> {
    /// Create a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Vec2i {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Widen to floating point.
    #[inline]
    pub fn as_f64(self) -> Vec2f {
        Vec2f::new(f64::from(self.x), f64::from(self.y))
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Mul<Output = T>> Mul for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl<T: Div<Output = T>> Div for Vec2<T> {
    type Output = Self;

    /// Component-wise division. Integer division truncates toward zero.
    #[inline]
    fn div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2i::new(6, 8);
        let b = Vec2i::new(2, 4);

        assert_eq!(a + b, Vec2i::new(8, 12));
        assert_eq!(a - b, Vec2i::new(4, 4));
        assert_eq!(a * b, Vec2i::new(12, 32));
        assert_eq!(a / b, Vec2i::new(3, 2));
    }

    #[test]
    fn test_vec2_integer_division_truncates() {
        assert_eq!(Vec2i::new(7, -7) / Vec2i::new(2, 2), Vec2i::new(3, -3));
    }

    #[test]
    fn test_vec2_float() {
        let v = Vec2f::new(1.5, 2.0) * Vec2f::new(2.0, 0.5);
        assert_eq!(v, Vec2f::new(3.0, 1.0));
        assert_eq!(Vec2i::new(3, -4).as_f64(), Vec2f::new(3.0, -4.0));
    }

    #[test]
    fn test_vec2_from_tuple() {
        let v: Vec2i = (3, 9).into();
        assert_eq!(v, Vec2i::new(3, 9));
        assert_eq!(format!("{v:?}"), "(3, 9)");
    }
}
