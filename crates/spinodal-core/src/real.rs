//! The [`Real`] scalar abstraction.

use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Floating-point element type for grids, stencils and operators.
///
/// Implemented for `f32` and `f64`. Stencil coefficients are computed in
/// the element type itself, so `f32` stencils lose precision sooner at high
/// error orders than `f64` ones.
///
/// # Examples
///
/// ```
/// use spinodal_core::Real;
///
/// fn half<T: Real>(x: T) -> T {
///     x * T::lit(0.5)
/// }
///
/// assert_eq!(half(3.0f64), 1.5);
/// assert_eq!(half(3.0f32), 1.5);
/// ```
pub trait Real:
    Float
    + FloatConst
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + 'static
{
    /// Convert an `f64` literal into this type (rounding for `f32`).
    fn lit(value: f64) -> Self;

    /// Convert a count or index into this type.
    fn of_usize(value: usize) -> Self;

    /// Convert a signed integer (offset, wavenumber) into this type.
    fn of_i64(value: i64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn of_usize(value: usize) -> Self {
        value as f32
    }

    #[inline]
    fn of_i64(value: i64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }

    #[inline]
    fn of_usize(value: usize) -> Self {
        value as f64
    }

    #[inline]
    fn of_i64(value: i64) -> Self {
        value as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factorial<T: Real>(n: usize) -> T {
        (2..=n).fold(T::one(), |acc, k| acc * T::of_usize(k))
    }

    #[test]
    fn conversions_round_trip_small_values() {
        assert_eq!(f64::of_i64(-7), -7.0);
        assert_eq!(f32::of_usize(12), 12.0);
        assert_eq!(f64::lit(0.25), 0.25);
    }

    #[test]
    fn generic_arithmetic() {
        assert_eq!(factorial::<f64>(5), 120.0);
        assert_eq!(factorial::<f32>(0), 1.0);
        assert!((f64::PI() - std::f64::consts::PI).abs() < f64::EPSILON);
    }
}
