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

//! # Variadic Folds
//!
//! Reduction of any number of operands to a single value.
//!
//! Two shapes of fold are provided and they are deliberately kept apart:
//!
//! - **Monoid folds** (`sum`, `product`) start from an explicit identity
//!   element. They are total: zero operands yield the identity, one operand
//!   yields that operand combined with the identity.
//! - **Seeded folds** (`difference`, `quotient`) have no identity to start
//!   from, because subtraction and division have no two-sided neutral element.
//!   The first operand seeds the accumulator and the rest are folded in from
//!   the left. Zero operands yield `None`; one operand yields it unchanged.
//!
//! ```rust
//! use luka_core::fold::{difference, product, sum};
//!
//! assert_eq!(sum([1.0, 2.0, 3.0, 4.0]), 10.0);
//! assert_eq!(sum::<f64, _>([]), 0.0);
//! assert_eq!(product([1.0, 2.0, 3.0, 4.0]), 24.0);
//! assert_eq!(difference([10.0, 3.0, 2.0]), Some(5.0));
//! assert_eq!(difference::<f64, _>([]), None);
//! ```

use crate::num::ops::arithmetic;
use num_traits::{ConstOne, ConstZero, Float};

/// A binary operation that can be folded over a sequence of operands.
///
/// No algebraic law is implied. Associativity and an identity element are
/// the business of [`Monoid`].
pub trait Combine<T> {
    /// Combines the accumulator with the next operand.
    fn combine(acc: T, x: T) -> T;
}

/// An associative [`Combine`] with a two-sided identity element.
///
/// Implementors guarantee `combine(IDENTITY, x) == x` and
/// `combine(x, IDENTITY) == x` (up to the sign of zero for floats), which is
/// what makes folding an empty sequence well-defined.
pub trait Monoid<T>: Combine<T> {
    /// The identity element the fold starts from.
    const IDENTITY: T;
}

/// Addition, with identity `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Additive;

/// Multiplication, with identity `1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Multiplicative;

/// Subtraction. Not associative, no identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Subtractive;

/// Division. Not associative, no identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Divisive;

impl<T: Float> Combine<T> for Additive {
    #[inline(always)]
    fn combine(acc: T, x: T) -> T {
        arithmetic::add(acc, x)
    }
}

impl<T: Float + ConstZero> Monoid<T> for Additive {
    const IDENTITY: T = T::ZERO;
}

impl<T: Float> Combine<T> for Multiplicative {
    #[inline(always)]
    fn combine(acc: T, x: T) -> T {
        arithmetic::mul(acc, x)
    }
}

impl<T: Float + ConstOne> Monoid<T> for Multiplicative {
    const IDENTITY: T = T::ONE;
}

impl<T: Float> Combine<T> for Subtractive {
    #[inline(always)]
    fn combine(acc: T, x: T) -> T {
        arithmetic::sub(acc, x)
    }
}

impl<T: Float> Combine<T> for Divisive {
    #[inline(always)]
    fn combine(acc: T, x: T) -> T {
        arithmetic::div(acc, x)
    }
}

/// Folds `operands` with the monoid `M`, starting from its identity.
///
/// # Examples
///
/// ```rust
/// # use luka_core::fold::{fold_monoid, Multiplicative};
/// assert_eq!(fold_monoid::<Multiplicative, f64, _>([2.0, 2.0, 2.0]), 8.0);
/// assert_eq!(fold_monoid::<Multiplicative, f64, _>([]), 1.0);
/// ```
#[inline]
pub fn fold_monoid<M, T, I>(operands: I) -> T
where
    M: Monoid<T>,
    I: IntoIterator<Item = T>,
{
    operands.into_iter().fold(M::IDENTITY, M::combine)
}

/// Folds `operands` from the left with `C`, seeding the accumulator with the
/// first operand.
///
/// Returns `None` if `operands` is empty and the sole operand unchanged if
/// there is exactly one.
///
/// # Examples
///
/// ```rust
/// # use luka_core::fold::{fold_seeded, Divisive};
/// assert_eq!(fold_seeded::<Divisive, f64, _>([100.0, 5.0, 2.0]), Some(10.0));
/// assert_eq!(fold_seeded::<Divisive, f64, _>([7.0]), Some(7.0));
/// assert_eq!(fold_seeded::<Divisive, f64, _>([]), None);
/// ```
#[inline]
pub fn fold_seeded<C, T, I>(operands: I) -> Option<T>
where
    C: Combine<T>,
    I: IntoIterator<Item = T>,
{
    operands.into_iter().reduce(C::combine)
}

/// Returns the sum of all `operands`, or `0` if there are none.
#[inline]
pub fn sum<T, I>(operands: I) -> T
where
    T: Float + ConstZero,
    I: IntoIterator<Item = T>,
{
    fold_monoid::<Additive, T, I>(operands)
}

/// Returns the product of all `operands`, or `1` if there are none.
#[inline]
pub fn product<T, I>(operands: I) -> T
where
    T: Float + ConstOne,
    I: IntoIterator<Item = T>,
{
    fold_monoid::<Multiplicative, T, I>(operands)
}

/// Returns `x0 - x1 - ... - xn` evaluated from the left.
///
/// `None` for no operands, the operand itself for one.
#[inline]
pub fn difference<T, I>(operands: I) -> Option<T>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    fold_seeded::<Subtractive, T, I>(operands)
}

/// Returns `x0 / x1 / ... / xn` evaluated from the left.
///
/// `None` for no operands, the operand itself for one.
#[inline]
pub fn quotient<T, I>(operands: I) -> Option<T>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    fold_seeded::<Divisive, T, I>(operands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_nothing_is_zero() {
        assert_eq!(sum::<f64, _>([]), 0.0);
        assert!(sum::<f64, _>([]).is_sign_positive());
    }

    #[test]
    fn test_identities_per_float_type() {
        assert!(<Additive as Monoid<f32>>::IDENTITY.is_sign_positive());
        assert_eq!(<Additive as Monoid<f32>>::IDENTITY, 0.0);
        assert_eq!(<Multiplicative as Monoid<f32>>::IDENTITY, 1.0);
        assert_eq!(<Multiplicative as Monoid<f64>>::IDENTITY, 1.0);
    }

    #[test]
    fn test_product_of_nothing_is_one() {
        assert_eq!(product::<f64, _>([]), 1.0);
        assert_eq!(product::<f32, _>([]), 1.0);
    }

    #[test]
    fn test_sum_literals() {
        assert_eq!(sum([7.0]), 7.0);
        assert_eq!(sum([1.0, 2.0, 3.0, 4.0]), 10.0);
        assert_eq!(sum((1..=10).map(f64::from)), 55.0);
        assert_eq!(sum([1.0, 2.0, 3.0]), sum([3.0, 2.0, 1.0]));
    }

    #[test]
    fn test_product_literals() {
        assert_eq!(product([7.0]), 7.0);
        assert_eq!(product([1.0, 2.0, 3.0, 4.0]), 24.0);
        assert_eq!(product([10.0, 10.0, 10.0]), 1000.0);
        assert_eq!(product([2.0, 3.0, 4.0]), product([4.0, 3.0, 2.0]));
    }

    #[test]
    fn test_folds_accept_borrowed_iterators() {
        let xs = vec![0.5, 1.5, 2.0];
        assert_eq!(sum(xs.iter().copied()), 4.0);
        assert_eq!(product(xs.iter().copied()), 1.5);
    }

    #[test]
    fn test_monoid_folds_propagate_non_finite() {
        assert!(sum([1.0, f64::NAN, 2.0]).is_nan());
        assert_eq!(sum([1.0, f64::INFINITY]), f64::INFINITY);
        assert!(product([0.0, f64::INFINITY]).is_nan());
    }

    #[test]
    fn test_monoid_folds_and_signed_zero() {
        // 0.0 + -0.0 is +0.0, 1.0 * -0.0 is -0.0
        assert!(sum([-0.0f64]).is_sign_positive());
        assert!(product([-0.0f64]).is_sign_negative());
    }

    #[test]
    fn test_difference_policy() {
        assert_eq!(difference::<f64, _>([]), None);
        assert_eq!(difference([7.0]), Some(7.0));
        assert_eq!(difference([10.0, 3.0]), Some(7.0));
        assert_eq!(difference([10.0, 3.0, 2.0]), Some(5.0));
        // left fold, not right fold: 10 - (3 - 2) would be 9
        assert_ne!(difference([10.0, 3.0, 2.0]), Some(9.0));
    }

    #[test]
    fn test_quotient_policy() {
        assert_eq!(quotient::<f64, _>([]), None);
        assert_eq!(quotient([7.0]), Some(7.0));
        assert_eq!(quotient([100.0, 5.0, 2.0]), Some(10.0));
        assert_eq!(quotient([1.0, 0.0]), Some(f64::INFINITY));
    }

    #[test]
    fn test_seeded_fold_keeps_sole_negative_zero() {
        let sole = difference([-0.0f64]).unwrap();
        assert!(sole.is_sign_negative());
    }

    #[test]
    fn test_identity_laws() {
        let zero = <Additive as Monoid<f64>>::IDENTITY;
        let one = <Multiplicative as Monoid<f64>>::IDENTITY;
        for x in [-3.5f64, 0.0, 1.0, 42.0] {
            assert_eq!(<Additive as Combine<f64>>::combine(zero, x), x);
            assert_eq!(<Additive as Combine<f64>>::combine(x, zero), x);
            assert_eq!(<Multiplicative as Combine<f64>>::combine(one, x), x);
            assert_eq!(<Multiplicative as Combine<f64>>::combine(x, one), x);
        }
    }
}
