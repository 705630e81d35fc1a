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

//! Operations as values.
//!
//! An [`Operation`] pairs the identity of a namespace member
//! ([`OperationId`]) with the function pointer that implements it. It is
//! `Copy`, compares by identity, and can be invoked either directly through
//! its [`Function`] or dynamically through [`Operation::apply`] with a slice
//! of [`Value`]s.

use crate::error::{ApplyError, LookupError};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// The number of operands an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly one operand.
    Unary,
    /// Exactly two operands.
    Binary,
    /// Any number of operands, including none.
    Variadic,
}

impl Arity {
    /// Returns `true` if an invocation with `count` operands is well-formed.
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Unary => count == 1,
            Self::Binary => count == 2,
            Self::Variadic => true,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unary => write!(f, "1"),
            Self::Binary => write!(f, "2"),
            Self::Variadic => write!(f, "any number of"),
        }
    }
}

/// Identity of a distinct operation in the namespace.
///
/// Aliases do not get their own id: `"exp"` is [`OperationId::Pow`] and
/// `"equal"` is [`OperationId::Eq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationId {
    /// `neg`
    Neg,
    /// `not`
    Not,
    /// `add`
    Add,
    /// `sub`
    Sub,
    /// `mul`
    Mul,
    /// `div`
    Div,
    /// `pow`, alias `exp`
    Pow,
    /// `rem`
    Rem,
    /// `eq`, alias `equal`
    Eq,
    /// `ne`
    Ne,
    /// `lt`
    Lt,
    /// `le`
    Le,
    /// `gt`
    Gt,
    /// `ge`
    Ge,
    /// `sum`
    Sum,
    /// `product`
    Product,
}

impl OperationId {
    /// Every operation, in namespace order.
    pub const ALL: [OperationId; 16] = [
        Self::Neg,
        Self::Not,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Pow,
        Self::Rem,
        Self::Eq,
        Self::Ne,
        Self::Lt,
        Self::Le,
        Self::Gt,
        Self::Ge,
        Self::Sum,
        Self::Product,
    ];

    /// The canonical name of the operation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neg => "neg",
            Self::Not => "not",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Pow => "pow",
            Self::Rem => "rem",
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Sum => "sum",
            Self::Product => "product",
        }
    }

    /// The number of operands the operation takes.
    pub const fn arity(self) -> Arity {
        match self {
            Self::Neg | Self::Not => Arity::Unary,
            Self::Sum | Self::Product => Arity::Variadic,
            _ => Arity::Binary,
        }
    }
}

impl Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationId {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = match s {
            "neg" => Self::Neg,
            "not" => Self::Not,
            "add" => Self::Add,
            "sub" => Self::Sub,
            "mul" => Self::Mul,
            "div" => Self::Div,
            "pow" | "exp" => Self::Pow,
            "rem" => Self::Rem,
            "eq" | "equal" => Self::Eq,
            "ne" => Self::Ne,
            "lt" => Self::Lt,
            "le" => Self::Le,
            "gt" => Self::Gt,
            "ge" => Self::Ge,
            "sum" => Self::Sum,
            "product" => Self::Product,
            _ => return Err(LookupError::new(s)),
        };
        Ok(id)
    }
}

/// A dynamically typed operand or result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric operand or result.
    Number(f64),
    /// The result of a comparison, or the operand of `not`.
    Boolean(bool),
}

impl Value {
    /// Returns the number, or `None` for a boolean.
    #[inline]
    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(x) => Some(x),
            Self::Boolean(_) => None,
        }
    }

    /// Returns the boolean, or `None` for a number.
    #[inline]
    pub fn as_boolean(self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(b),
            Self::Number(_) => None,
        }
    }

    /// Name of the variant's type, as used in error messages.
    #[inline]
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Number(_) => Value::NUMBER,
            Self::Boolean(_) => Value::BOOLEAN,
        }
    }

    const NUMBER: &'static str = "number";
    const BOOLEAN: &'static str = "boolean";
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Number(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// The function behind an operation, by shape.
#[derive(Clone, Copy)]
pub enum Function {
    /// `f64 -> f64`
    Unary(fn(f64) -> f64),
    /// `bool -> bool`
    Logical(fn(bool) -> bool),
    /// `(f64, f64) -> f64`
    Binary(fn(f64, f64) -> f64),
    /// `(f64, f64) -> bool`
    Predicate(fn(f64, f64) -> bool),
    /// `&[f64] -> f64`
    Fold(fn(&[f64]) -> f64),
}

impl Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = match self {
            Self::Unary(_) => "Unary",
            Self::Logical(_) => "Logical",
            Self::Binary(_) => "Binary",
            Self::Predicate(_) => "Predicate",
            Self::Fold(_) => "Fold",
        };
        f.write_str(shape)
    }
}

/// A namespace member: an [`OperationId`] and its implementation.
///
/// Two operations are equal exactly when their ids are equal, so an alias and
/// its canonical name yield equal operations.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    id: OperationId,
    function: Function,
}

impl Operation {
    #[inline]
    pub(crate) const fn new(id: OperationId, function: Function) -> Self {
        Self { id, function }
    }

    /// The identity of this operation.
    #[inline]
    pub fn id(&self) -> OperationId {
        self.id
    }

    /// The function pointer implementing this operation.
    #[inline]
    pub fn function(&self) -> Function {
        self.function
    }

    /// Invokes the operation with dynamically typed operands.
    ///
    /// Fails only if the number of operands does not match the operation's
    /// [`Arity`] or an operand has the wrong type. The computation itself is
    /// total.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luka::{OP, Value};
    ///
    /// let add = OP.get("add").unwrap();
    /// assert_eq!(add.apply(&[1.0.into(), 6.0.into()]).unwrap(), Value::Number(7.0));
    /// assert!(add.apply(&[1.0.into()]).is_err());
    /// ```
    pub fn apply(&self, args: &[Value]) -> Result<Value, ApplyError> {
        let result = match self.function {
            Function::Unary(f) => {
                let [x] = self.exactly::<1>(args)?;
                Value::Number(f(self.number(x, 0)?))
            }
            Function::Logical(f) => {
                let [x] = self.exactly::<1>(args)?;
                Value::Boolean(f(self.boolean(x, 0)?))
            }
            Function::Binary(f) => {
                let [x, y] = self.exactly::<2>(args)?;
                Value::Number(f(self.number(x, 0)?, self.number(y, 1)?))
            }
            Function::Predicate(f) => {
                let [x, y] = self.exactly::<2>(args)?;
                Value::Boolean(f(self.number(x, 0)?, self.number(y, 1)?))
            }
            Function::Fold(f) => {
                let operands = args
                    .iter()
                    .enumerate()
                    .map(|(position, &v)| self.number(v, position))
                    .collect::<Result<Vec<f64>, _>>()?;
                Value::Number(f(&operands))
            }
        };
        Ok(result)
    }

    fn exactly<const N: usize>(&self, args: &[Value]) -> Result<[Value; N], ApplyError> {
        <[Value; N]>::try_from(args).map_err(|_| {
            #[cfg(feature = "tracing")]
            tracing::trace!(op = self.id.name(), found = args.len(), "wrong number of operands");

            ApplyError::Arity {
                id: self.id,
                expected: self.id.arity(),
                found: args.len(),
            }
        })
    }

    fn number(&self, value: Value, position: usize) -> Result<f64, ApplyError> {
        value
            .as_number()
            .ok_or_else(|| self.type_error(value, position, Value::NUMBER))
    }

    fn boolean(&self, value: Value, position: usize) -> Result<bool, ApplyError> {
        value
            .as_boolean()
            .ok_or_else(|| self.type_error(value, position, Value::BOOLEAN))
    }

    fn type_error(&self, value: Value, position: usize, expected: &'static str) -> ApplyError {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            op = self.id.name(),
            position,
            found = value.type_name(),
            "operand of wrong type"
        );

        ApplyError::Type {
            id: self.id,
            position,
            expected,
            found: value.type_name(),
        }
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Operation {}

impl std::hash::Hash for Operation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id.arity() {
            Arity::Variadic => write!(f, "{}/n", self.id.name()),
            arity => write!(f, "{}/{}", self.id.name(), arity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;

    fn binary(id: OperationId, f: fn(f64, f64) -> f64) -> Operation {
        Operation::new(id, Function::Binary(f))
    }

    #[test]
    fn test_operation_id_names_round_trip() {
        for id in OperationId::ALL {
            assert_eq!(id.name().parse::<OperationId>().unwrap(), id);
        }
    }

    #[test]
    fn test_aliases_parse_to_canonical_id() {
        assert_eq!("exp".parse::<OperationId>().unwrap(), OperationId::Pow);
        assert_eq!("equal".parse::<OperationId>().unwrap(), OperationId::Eq);
    }

    #[test]
    fn test_unknown_name_is_lookup_error() {
        let err = "modulo".parse::<OperationId>().unwrap_err();
        assert_eq!(err.name(), "modulo");
        assert!("Add".parse::<OperationId>().is_err());
    }

    #[test]
    fn test_arity() {
        assert_eq!(OperationId::Neg.arity(), Arity::Unary);
        assert_eq!(OperationId::Not.arity(), Arity::Unary);
        assert_eq!(OperationId::Rem.arity(), Arity::Binary);
        assert_eq!(OperationId::Ge.arity(), Arity::Binary);
        assert_eq!(OperationId::Product.arity(), Arity::Variadic);
        assert!(Arity::Variadic.accepts(0));
        assert!(!Arity::Binary.accepts(3));
    }

    #[test]
    fn test_operations_compare_by_id() {
        let a = binary(OperationId::Pow, ops::pow);
        let b = binary(OperationId::Pow, ops::pow);
        let c = binary(OperationId::Add, ops::add);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_apply_binary() {
        let op = binary(OperationId::Sub, ops::sub);
        let out = op.apply(&[Value::Number(8.0), Value::Number(1.0)]).unwrap();
        assert_eq!(out, Value::Number(7.0));
    }

    #[test]
    fn test_apply_rejects_wrong_arity() {
        let op = binary(OperationId::Sub, ops::sub);
        let err = op.apply(&[Value::Number(8.0)]).unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Arity {
                id: OperationId::Sub,
                expected: Arity::Binary,
                found: 1
            }
        ));
    }

    #[test]
    fn test_apply_rejects_wrong_type() {
        let op = Operation::new(OperationId::Not, Function::Logical(ops::not));
        let err = op.apply(&[Value::Number(1.0)]).unwrap_err();
        assert!(matches!(
            err,
            ApplyError::Type {
                position: 0,
                expected: "boolean",
                found: "number",
                ..
            }
        ));
        assert_eq!(op.apply(&[Value::Boolean(true)]).unwrap(), Value::Boolean(false));
    }

    #[test]
    fn test_apply_fold_reports_position_of_bad_operand() {
        let op = Operation::new(OperationId::Sum, Function::Fold(ops::sum));
        assert_eq!(op.apply(&[]).unwrap(), Value::Number(0.0));
        let err = op
            .apply(&[1.0.into(), 2.0.into(), true.into()])
            .unwrap_err();
        assert!(matches!(err, ApplyError::Type { position: 2, .. }));
    }

    #[test]
    fn test_display() {
        let op = binary(OperationId::Add, ops::add);
        assert_eq!(op.to_string(), "add/2");
        let fold = Operation::new(OperationId::Product, Function::Fold(ops::product));
        assert_eq!(fold.to_string(), "product/n");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Number(7.5).to_string(), "7.5");
    }
}
