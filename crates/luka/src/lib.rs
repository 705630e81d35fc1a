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

//! # Luka
//!
//! Functional replacements for a handful of arithmetic and comparison
//! operators, so that they can be passed around as values instead of being
//! written infix.
//!
//! ```rust
//! use luka::{add, eq, mul};
//!
//! fn hypotenuse(x: f64, y: f64) -> f64 {
//!     add(mul(x, x), mul(y, y)).sqrt()
//! }
//!
//! assert!(eq(hypotenuse(3.0, 4.0), 5.0));
//! ```
//!
//! ## Surface
//!
//! - Flat functions at the crate root: `neg`, `not`, `add`, `sub`, `mul`,
//!   `div`, `pow`, `rem`, `eq`, `ne`, `lt`, `le`, `gt`, `ge`, `sum`,
//!   `product`, plus the seeded folds `difference` and `quotient`.
//! - [`OP`], the frozen [`Namespace`] record holding the same functions as
//!   fields and resolving them by name (aliases `exp` and `equal` included).
//! - The macros [`sum!`], [`product!`], [`difference!`] and [`quotient!`] for
//!   variadic call syntax.
//!
//! ## Semantics
//!
//! Operands are `f64` and follow IEEE-754: nothing panics, `0 / 0` is `NaN`,
//! `1 / 0` is `inf`, `NaN` is equal to nothing, and signed zeros are left as
//! the hardware produces them. `sum` and `product` are total (`0` and `1` for
//! no operands). `sub` and `div` are strictly binary; their variadic forms
//! `difference` and `quotient` fold from the left starting at the first
//! operand and return `None` when given nothing.
//!
//! ## Features
//!
//! - `tracing`: emit `trace` events for unknown names and rejected dynamic
//!   invocations.

pub mod error;
pub mod namespace;
pub mod operation;
pub mod ops;

pub use error::{ApplyError, LookupError};
pub use namespace::{Namespace, OP};
pub use operation::{Arity, Function, Operation, OperationId, Value};
pub use ops::*;

/// Sums any number of numeric expressions.
///
/// Operands go through `f64::from`, so only types that convert losslessly are
/// accepted (`f32`, `f64`, and integers up to 32 bits). Wider integers must be
/// cast explicitly by the caller.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::sum!(1, 2, 3, 4), 10.0);
/// assert_eq!(luka::sum!(), 0.0);
/// ```
///
/// ```rust,compile_fail
/// let big: i64 = (1 << 53) + 1;
/// luka::sum!(big);
/// ```
#[macro_export]
macro_rules! sum {
    ($($x:expr),* $(,)?) => {
        $crate::sum(&[$(::core::primitive::f64::from($x)),*])
    };
}

/// Multiplies any number of numeric expressions.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::product!(10, 10, 10), 1000.0);
/// assert_eq!(luka::product!(), 1.0);
/// ```
#[macro_export]
macro_rules! product {
    ($($x:expr),* $(,)?) => {
        $crate::product(&[$(::core::primitive::f64::from($x)),*])
    };
}

/// Left-folds subtraction over numeric expressions; `None` for none.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::difference!(10, 3, 2), Some(5.0));
/// assert_eq!(luka::difference!(), None);
/// ```
#[macro_export]
macro_rules! difference {
    ($($x:expr),* $(,)?) => {
        $crate::difference(&[$(::core::primitive::f64::from($x)),*])
    };
}

/// Left-folds division over numeric expressions; `None` for none.
///
/// # Examples
///
/// ```rust
/// assert_eq!(luka::quotient!(100, 5, 2), Some(10.0));
/// assert_eq!(luka::quotient!(7), Some(7.0));
/// ```
#[macro_export]
macro_rules! quotient {
    ($($x:expr),* $(,)?) => {
        $crate::quotient(&[$(::core::primitive::f64::from($x)),*])
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_accept_mixed_numeric_expressions() {
        let n: i32 = 4;
        assert_eq!(crate::sum!(1, 2.5, n), 7.5);
        assert_eq!(crate::product!(2, 0.5,), 1.0);
        assert_eq!(crate::difference!(1 + 1), Some(2.0));
        assert_eq!(crate::quotient!(1, 0), Some(f64::INFINITY));
    }

    #[test]
    fn test_macros_convert_without_rounding() {
        let widest: u32 = u32::MAX;
        let small: i16 = -7;
        assert_eq!(crate::sum!(widest), 4_294_967_295.0);
        assert_eq!(crate::product!(small, 2u8), -14.0);
        assert_eq!(crate::sum!(0.1f32), f64::from(0.1f32));
    }

    #[test]
    fn test_macros_with_no_operands() {
        assert_eq!(crate::sum!(), 0.0);
        assert_eq!(crate::product!(), 1.0);
        assert_eq!(crate::difference!(), None);
        assert_eq!(crate::quotient!(), None);
    }
}
