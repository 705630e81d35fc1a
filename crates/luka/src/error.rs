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

//! Errors of the name-based surface.
//!
//! The operations themselves never fail. Errors only arise when an operation
//! is looked up by a name that does not exist, or invoked dynamically with the
//! wrong number or type of operands.

use crate::operation::{Arity, OperationId};
use std::fmt::Display;

/// A name that does not denote any operation in the namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    name: String,
}

impl LookupError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// The name that failed to resolve.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown operation '{}'", self.name)
    }
}

impl std::error::Error for LookupError {}

/// The error type for dynamic invocation through [`Operation::apply`](crate::Operation::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// The operation was looked up by a name that does not exist.
    Lookup(LookupError),
    /// The number of operands does not match the operation's arity.
    Arity {
        id: OperationId,
        expected: Arity,
        found: usize,
    },
    /// An operand has the wrong type.
    Type {
        id: OperationId,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
}

impl Display for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lookup(e) => write!(f, "Lookup error: {e}"),
            Self::Arity {
                id,
                expected,
                found,
            } => write!(
                f,
                "Operation '{id}' takes {expected} operand(s), but {found} were given"
            ),
            Self::Type {
                id,
                position,
                expected,
                found,
            } => write!(
                f,
                "Operand {position} of '{id}' must be a {expected}, found a {found}"
            ),
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lookup(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LookupError> for ApplyError {
    fn from(e: LookupError) -> Self {
        Self::Lookup(e)
    }
}
