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

//! The operations of the namespace, fixed to `f64` operands.
//!
//! These are the functions stored in [`OP`](crate::OP) and re-exported from
//! the crate root. Each one forwards to its generic counterpart in
//! `luka_core`, so the semantics documented there apply unchanged.

use luka_core::{
    fold,
    num::ops::{arithmetic, comparison, logical},
};

/// Negation: changes the sign of `x`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::neg(7.0), -7.0);
/// ```
#[inline]
pub fn neg(x: f64) -> f64 {
    arithmetic::neg(x)
}

/// Boolean negation.
///
/// # Examples
///
/// ```rust
/// assert!(luka::not(7.0 == 11.0));
/// ```
#[inline]
pub fn not(x: bool) -> bool {
    logical::not(x)
}

/// Addition: returns the sum of `x` and `y`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::add(1.0, 6.0), 7.0);
/// ```
#[inline]
pub fn add(x: f64, y: f64) -> f64 {
    arithmetic::add(x, y)
}

/// Subtraction: returns the difference of `x` and `y`.
#[inline]
pub fn sub(x: f64, y: f64) -> f64 {
    arithmetic::sub(x, y)
}

/// Multiplication: returns the product of `x` and `y`.
#[inline]
pub fn mul(x: f64, y: f64) -> f64 {
    arithmetic::mul(x, y)
}

/// Division: returns the quotient of `x` and `y`.
///
/// Dividing by zero yields `±inf`, or `NaN` for `0 / 0`.
#[inline]
pub fn div(x: f64, y: f64) -> f64 {
    arithmetic::div(x, y)
}

/// Exponent: returns base `x` to the power of `y`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::pow(2.0, 7.0), 128.0);
/// ```
#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    arithmetic::pow(x, y)
}

/// Remainder of `x` divided by `y`, taking the sign of the dividend.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::rem(15.0, 7.0), 1.0);
/// assert_eq!(luka::rem(-11.0, 5.0), -1.0);
/// ```
#[inline]
pub fn rem(x: f64, y: f64) -> f64 {
    arithmetic::rem(x, y)
}

/// Checks whether two numbers are equal. `NaN` equals nothing.
#[inline]
pub fn eq(x: f64, y: f64) -> bool {
    comparison::eq(x, y)
}

/// Checks whether two numbers differ.
#[inline]
pub fn ne(x: f64, y: f64) -> bool {
    comparison::ne(x, y)
}

/// Checks whether `x < y`.
#[inline]
pub fn lt(x: f64, y: f64) -> bool {
    comparison::lt(x, y)
}

/// Checks whether `x <= y`.
#[inline]
pub fn le(x: f64, y: f64) -> bool {
    comparison::le(x, y)
}

/// Checks whether `x > y`.
#[inline]
pub fn gt(x: f64, y: f64) -> bool {
    comparison::gt(x, y)
}

/// Checks whether `x >= y`.
#[inline]
pub fn ge(x: f64, y: f64) -> bool {
    comparison::ge(x, y)
}

/// Returns the sum of `n` numbers; `0` for none.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
/// assert_eq!(luka::sum(&[]), 0.0);
/// ```
#[inline]
pub fn sum(xs: &[f64]) -> f64 {
    fold::sum(xs.iter().copied())
}

/// Returns the product of `n` numbers; `1` for none.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::product(&[1.0, 2.0, 3.0, 4.0]), 24.0);
/// assert_eq!(luka::product(&[]), 1.0);
/// ```
#[inline]
pub fn product(xs: &[f64]) -> f64 {
    fold::product(xs.iter().copied())
}

/// Subtracts every following number from the first, left to right.
///
/// Returns `None` for an empty slice and the sole element for a slice of one.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::difference(&[10.0, 3.0, 2.0]), Some(5.0));
/// assert_eq!(luka::difference(&[7.0]), Some(7.0));
/// assert_eq!(luka::difference(&[]), None);
/// ```
#[inline]
pub fn difference(xs: &[f64]) -> Option<f64> {
    fold::difference(xs.iter().copied())
}

/// Divides the first number by every following one, left to right.
///
/// Returns `None` for an empty slice and the sole element for a slice of one.
#[inline]
pub fn quotient(xs: &[f64]) -> Option<f64> {
    fold::quotient(xs.iter().copied())
}
