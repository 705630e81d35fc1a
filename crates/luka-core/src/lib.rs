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

//! # Luka Core
//!
//! Generic, by-value numeric building blocks behind the `luka` operator
//! namespace. Everything in this crate is a pure function or a compile-time
//! constant: there is no state, no I/O, and nothing that can fail at runtime.
//!
//! ## Modules
//!
//! - `num`: The arithmetic, comparison and logical operations as free
//!   functions generic over `num_traits::Float`.
//! - `fold`: Monoid and seeded folds, with identities taken from
//!   `num_traits::{ConstZero, ConstOne}`. `sum` and `product` are total over any
//!   number of operands; `difference` and `quotient` are left folds seeded by
//!   their first operand and return `None` when given nothing.
//!
//! ## Purpose
//!
//! Infix operators cannot be passed to higher-order functions. These
//! primitives can:
//!
//! ```rust
//! use luka_core::num::ops::arithmetic::{add, mul};
//!
//! let dot = [1.0, 2.0, 3.0]
//!     .iter()
//!     .zip([4.0, 5.0, 6.0])
//!     .map(|(&x, y)| mul(x, y))
//!     .fold(0.0, add);
//! assert_eq!(dot, 32.0);
//! ```

pub mod fold;
pub mod num;
