// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::Float;

/// Returns the additive inverse of `x`.
///
/// Only the sign bit changes, so `neg(0.0)` is `-0.0` and `neg(NaN)` is `NaN`.
///
/// # Examples
///
/// ```rust
/// # use luka_core::num::ops::arithmetic::neg;
/// assert_eq!(neg(7.0), -7.0);
/// assert_eq!(neg(neg(7.0)), 7.0);
/// ```
#[inline(always)]
pub fn neg<T: Float>(x: T) -> T {
    -x
}

/// Returns `x + y`.
///
/// # Examples
///
/// ```rust
/// # use luka_core::num::ops::arithmetic::add;
/// assert_eq!(add(1.0, 6.0), 7.0);
/// ```
#[inline(always)]
pub fn add<T: Float>(x: T, y: T) -> T {
    x + y
}

/// Returns `x - y`.
///
/// # Examples
///
/// ```rust
/// # use luka_core::num::ops::arithmetic::sub;
/// assert_eq!(sub(8.0, 1.0), 7.0);
/// ```
#[inline(always)]
pub fn sub<T: Float>(x: T, y: T) -> T {
    x - y
}

/// Returns `x * y`.
///
/// # Examples
///
/// ```rust
/// # use luka_core::num::ops::arithmetic::mul;
/// assert_eq!(mul(2.0, 7.0), 14.0);
/// ```
#[inline(always)]
pub fn mul<T: Float>(x: T, y: T) -> T {
    x * y
}

/// Returns `x / y`.
///
/// Division by zero is not an error: it yields `±inf` for a non-zero
/// dividend and `NaN` for `0 / 0`.
///
/// # Examples
///
/// ```rust
/// # use luka_core::num::ops::arithmetic::div;
/// assert_eq!(div(14.0, 2.0), 7.0);
/// assert_eq!(div(1.0, 0.0), f64::INFINITY);
/// assert!(div(0.0f64, 0.0).is_nan());
/// ```
#[inline(always)]
pub fn div<T: Float>(x: T, y: T) -> T {
    x / y
}

/// Returns `x` raised to the power `y`.
///
/// A `NaN` exponent always yields `NaN`, and so does `±1` raised to `±inf`.
/// `powf` returns `1` in both cases; here `NaN` propagates like it does
/// through every other operation. Any base to the power `0` is still `1`.
///
/// # Examples
///
/// ```rust
/// # use luka_core::num::ops::arithmetic::pow;
/// assert_eq!(pow(2.0, 7.0), 128.0);
/// assert!(pow(1.0, f64::NAN).is_nan());
/// ```
#[inline(always)]
pub fn pow<T: Float>(x: T, y: T) -> T {
    if y.is_nan() || (y.is_infinite() && x.abs() == T::one()) {
        return T::nan();
    }
    x.powf(y)
}

/// Returns the truncating remainder of `x / y`.
///
/// The result takes the sign of the dividend `x`, which is what the `%`
/// operator does for floats. This is not the Euclidean modulo.
///
/// # Examples
///
/// ```rust
/// # use luka_core::num::ops::arithmetic::rem;
/// assert_eq!(rem(15.0, 7.0), 1.0);
/// assert_eq!(rem(11.0, -5.0), 1.0);
/// assert_eq!(rem(-11.0, 5.0), -1.0);
/// ```
#[inline(always)]
pub fn rem<T: Float>(x: T, y: T) -> T {
    x % y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neg() {
        assert_eq!(neg(7.0), -7.0);
        assert_eq!(neg(-7.0f32), 7.0);
        assert_eq!(neg(7.0 + 11.0), neg(7.0) + neg(11.0));
        assert_eq!(neg(f64::INFINITY), f64::NEG_INFINITY);
        assert!(neg(f64::NAN).is_nan());
    }

    #[test]
    fn test_neg_flips_sign_of_zero() {
        assert!(neg(0.0f64).is_sign_negative());
        assert!(neg(-0.0f64).is_sign_positive());
    }

    #[test]
    fn test_add() {
        assert_eq!(add(7.0, 11.0), 18.0);
        assert_eq!(add(7.0, 0.0), 7.0);
        assert_eq!(add(f64::INFINITY, 1.0), f64::INFINITY);
        assert!(add(f64::INFINITY, f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_sub() {
        assert_eq!(sub(11.0, 7.0), 4.0);
        assert_eq!(sub(7.0, 0.0), 7.0);
        assert_eq!(2.0 * sub(11.0, 7.0), sub(2.0 * 11.0, 2.0 * 7.0));
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul(2.0, 7.0), 14.0);
        assert_eq!(mul(7.0, 1.0), 7.0);
        assert!(mul(-1.0f64, 0.0).is_sign_negative());
        assert!(mul(0.0f64, f64::INFINITY).is_nan());
    }

    #[test]
    fn test_div() {
        assert_eq!(div(7.0, 1.0), 7.0);
        assert_eq!(div(7.0, 7.0), 1.0);
        assert_eq!(div(1.0, 0.0), f64::INFINITY);
        assert_eq!(div(-1.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(div(1.0, -0.0), f64::NEG_INFINITY);
        assert!(div(0.0f64, 0.0).is_nan());
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(2.0, 7.0), 128.0);
        assert_eq!(pow(3.0, 4.0), 81.0);
        assert_eq!(pow(7.0, 0.0), 1.0);
        assert_eq!(pow(2.0, -1.0), 0.5);
        assert!(pow(-8.0f64, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn test_pow_propagates_nan_exponent() {
        assert!(pow(1.0f64, f64::NAN).is_nan());
        assert!(pow(2.0f64, f64::NAN).is_nan());
        assert!(pow(f64::NAN, 2.0).is_nan());
        assert!(pow(1.0f32, f32::NAN).is_nan());
        // zero exponent wins over a NaN base
        assert_eq!(pow(f64::NAN, 0.0), 1.0);
    }

    #[test]
    fn test_pow_unit_base_with_infinite_exponent_is_nan() {
        assert!(pow(1.0f64, f64::INFINITY).is_nan());
        assert!(pow(1.0f64, f64::NEG_INFINITY).is_nan());
        assert!(pow(-1.0f64, f64::INFINITY).is_nan());
        assert!(pow(-1.0f64, f64::NEG_INFINITY).is_nan());
        assert_eq!(pow(2.0, f64::INFINITY), f64::INFINITY);
        assert_eq!(pow(0.5, f64::INFINITY), 0.0);
        assert_eq!(pow(1.0, 1e300), 1.0);
    }

    #[test]
    fn test_pow_is_right_associative_when_nested() {
        // 2^(3^4) = 2^81, exactly representable
        let expected = (1u128 << 81) as f64;
        assert_eq!(pow(2.0, pow(3.0, 4.0)), expected);
        assert_ne!(pow(pow(2.0, 3.0), 4.0), expected);
    }

    #[test]
    fn test_rem_follows_sign_of_dividend() {
        assert_eq!(rem(11.0, -5.0), 1.0);
        assert_eq!(rem(-11.0, 5.0), -1.0);
        assert_eq!(rem(-11.0, -5.0), -1.0);
        assert_eq!(rem(5.5, 2.0), 1.5);
        assert!(rem(-10.0f64, 5.0).is_sign_negative());
    }

    #[test]
    fn test_rem_edge_cases() {
        assert!(rem(1.0f64, 0.0).is_nan());
        assert!(rem(f64::INFINITY, 2.0).is_nan());
        assert_eq!(rem(3.0, f64::INFINITY), 3.0);
    }
}
