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

//! # Operator Namespace
//!
//! [`OP`] is the read-only record of every operation, addressable both as a
//! struct field and by name.
//!
//! Fields are plain function pointers, so they can be copied out and passed
//! around like any other value:
//!
//! ```rust
//! use luka::OP;
//!
//! let hypotenuse = |x: f64, y: f64| (OP.add)((OP.mul)(x, x), (OP.mul)(y, y)).sqrt();
//! assert!((OP.eq)(hypotenuse(3.0, 4.0), 5.0));
//!
//! let fold = OP.add;
//! assert_eq!([1.0, 2.0, 3.0].into_iter().fold(0.0, fold), 6.0);
//! ```
//!
//! The name-based surface resolves strings, including the aliases `exp` and
//! `equal`, to [`Operation`]s:
//!
//! ```rust
//! use luka::{OP, Value};
//!
//! assert_eq!(OP.get("exp"), OP.get("pow"));
//! assert_eq!(OP.call("product", &[2.0.into(), 2.0.into(), 2.0.into()]).unwrap(), Value::Number(8.0));
//! assert!(OP.lookup("modulo").is_err());
//! ```

use crate::error::{ApplyError, LookupError};
use crate::operation::{Function, Operation, OperationId, Value};
use crate::ops;
use std::fmt::Debug;

/// Every name the namespace answers to, in iteration order.
const ENTRIES: [(&str, OperationId); 18] = [
    ("neg", OperationId::Neg),
    ("not", OperationId::Not),
    ("add", OperationId::Add),
    ("sub", OperationId::Sub),
    ("mul", OperationId::Mul),
    ("div", OperationId::Div),
    ("pow", OperationId::Pow),
    ("exp", OperationId::Pow),
    ("rem", OperationId::Rem),
    ("eq", OperationId::Eq),
    ("equal", OperationId::Eq),
    ("ne", OperationId::Ne),
    ("lt", OperationId::Lt),
    ("le", OperationId::Le),
    ("gt", OperationId::Gt),
    ("ge", OperationId::Ge),
    ("sum", OperationId::Sum),
    ("product", OperationId::Product),
];

/// The operator namespace.
///
/// The only instance is the immutable static [`OP`]. The type can neither be
/// constructed nor copied outside this crate, so its fields always hold the
/// functions documented on them. Copy a field out instead:
///
/// ```rust
/// let add = luka::OP.add;
/// assert_eq!(add(1.0, 6.0), 7.0);
/// ```
///
/// ```rust,compile_fail
/// let mut ns = luka::OP;
/// ns.add = luka::sub;
/// ```
pub struct Namespace {
    /// Negation: changes sign of `x`.
    pub neg: fn(f64) -> f64,
    /// Boolean negation.
    pub not: fn(bool) -> bool,
    /// Addition: `x + y`.
    pub add: fn(f64, f64) -> f64,
    /// Subtraction: `x - y`.
    pub sub: fn(f64, f64) -> f64,
    /// Multiplication: `x * y`.
    pub mul: fn(f64, f64) -> f64,
    /// Division: `x / y`, IEEE-754 on division by zero.
    pub div: fn(f64, f64) -> f64,
    /// Exponent: `x` to the power of `y`.
    pub pow: fn(f64, f64) -> f64,
    /// Alias of `pow`.
    pub exp: fn(f64, f64) -> f64,
    /// Remainder of `x / y` with the sign of `x`.
    pub rem: fn(f64, f64) -> f64,
    /// Equality; `NaN` equals nothing.
    pub eq: fn(f64, f64) -> bool,
    /// Alias of `eq`.
    pub equal: fn(f64, f64) -> bool,
    /// Inequality; `NaN` differs from everything.
    pub ne: fn(f64, f64) -> bool,
    /// Strictly less than.
    pub lt: fn(f64, f64) -> bool,
    /// Less than or equal.
    pub le: fn(f64, f64) -> bool,
    /// Strictly greater than.
    pub gt: fn(f64, f64) -> bool,
    /// Greater than or equal.
    pub ge: fn(f64, f64) -> bool,
    /// Sum of any number of operands; `0` for none.
    pub sum: fn(&[f64]) -> f64,
    /// Product of any number of operands; `1` for none.
    pub product: fn(&[f64]) -> f64,
    _sealed: (),
}

/// The operator namespace.
pub static OP: Namespace = Namespace {
    neg: ops::neg,
    not: ops::not,
    add: ops::add,
    sub: ops::sub,
    mul: ops::mul,
    div: ops::div,
    pow: ops::pow,
    exp: ops::pow,
    rem: ops::rem,
    eq: ops::eq,
    equal: ops::eq,
    ne: ops::ne,
    lt: ops::lt,
    le: ops::le,
    gt: ops::gt,
    ge: ops::ge,
    sum: ops::sum,
    product: ops::product,
    _sealed: (),
};

impl Namespace {
    /// Returns the operation identified by `id`.
    ///
    /// The function is chosen by `id` alone, so operations with equal ids
    /// always run the same code.
    pub fn operation(&self, id: OperationId) -> Operation {
        let function = match id {
            OperationId::Neg => Function::Unary(ops::neg),
            OperationId::Not => Function::Logical(ops::not),
            OperationId::Add => Function::Binary(ops::add),
            OperationId::Sub => Function::Binary(ops::sub),
            OperationId::Mul => Function::Binary(ops::mul),
            OperationId::Div => Function::Binary(ops::div),
            OperationId::Pow => Function::Binary(ops::pow),
            OperationId::Rem => Function::Binary(ops::rem),
            OperationId::Eq => Function::Predicate(ops::eq),
            OperationId::Ne => Function::Predicate(ops::ne),
            OperationId::Lt => Function::Predicate(ops::lt),
            OperationId::Le => Function::Predicate(ops::le),
            OperationId::Gt => Function::Predicate(ops::gt),
            OperationId::Ge => Function::Predicate(ops::ge),
            OperationId::Sum => Function::Fold(ops::sum),
            OperationId::Product => Function::Fold(ops::product),
        };
        Operation::new(id, function)
    }

    /// Returns the operation named `name`, or `None` if there is none.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Operation> {
        self.lookup(name).ok()
    }

    /// Returns the operation named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if `name` is neither an operation nor an alias.
    pub fn lookup(&self, name: &str) -> Result<Operation, LookupError> {
        match name.parse::<OperationId>() {
            Ok(id) => Ok(self.operation(id)),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(name, "unknown operation");
                Err(e)
            }
        }
    }

    /// Looks up `name` and applies it to `args`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::Lookup`] for an unknown name, and the errors of
    /// [`Operation::apply`] otherwise.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, ApplyError> {
        let operation = self.lookup(name)?;
        operation.apply(args)
    }

    /// Returns `true` if `name` denotes an operation.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        name.parse::<OperationId>().is_ok()
    }

    /// Iterates all `(name, operation)` pairs, aliases included.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Operation)> + '_ {
        ENTRIES
            .iter()
            .map(move |&(name, id)| (name, self.operation(id)))
    }

    /// Iterates all names, aliases included.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|&(name, _)| name)
    }

    /// The number of names in the namespace, aliases included.
    #[inline]
    pub fn len(&self) -> usize {
        ENTRIES.len()
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Debug for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
