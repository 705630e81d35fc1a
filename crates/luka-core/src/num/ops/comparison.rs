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

//! Comparison operators as functions.
//!
//! These are thin wrappers over `PartialEq` and `PartialOrd`, so for floats
//! they inherit IEEE-754 semantics: every comparison involving `NaN` is
//! `false` except `ne`, which is `true`. For non-`NaN` operands the usual
//! dualities hold (`lt(x, y) == gt(y, x)`, `le(x, y) == !gt(x, y)`).

/// Returns `true` if `x` and `y` are equal.
///
/// # Examples
///
/// ```rust
/// # use luka_core::num::ops::comparison::eq;
/// assert!(eq(7.0, 14.0 / 2.0));
/// assert!(!eq(f64::NAN, f64::NAN));
/// ```
#[inline(always)]
pub fn eq<T: PartialEq>(x: T, y: T) -> bool {
    x == y
}

/// Returns `true` if `x` and `y` are not equal.
#[inline(always)]
pub fn ne<T: PartialEq>(x: T, y: T) -> bool {
    x != y
}

/// Returns `true` if `x` is strictly less than `y`.
#[inline(always)]
pub fn lt<T: PartialOrd>(x: T, y: T) -> bool {
    x < y
}

/// Returns `true` if `x` is less than or equal to `y`.
#[inline(always)]
pub fn le<T: PartialOrd>(x: T, y: T) -> bool {
    x <= y
}

/// Returns `true` if `x` is strictly greater than `y`.
#[inline(always)]
pub fn gt<T: PartialOrd>(x: T, y: T) -> bool {
    x > y
}

/// Returns `true` if `x` is greater than or equal to `y`.
#[inline(always)]
pub fn ge<T: PartialOrd>(x: T, y: T) -> bool {
    x >= y
}
