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

//! # Numeric Operations
//!
//! Named, by-value versions of the primitive operators. Each function is a
//! plain `fn` item and therefore coerces to a function pointer, so it can be
//! stored in tables, passed to iterator adaptors, or compared by identity.
//!
//! ## Submodules
//!
//! - `arithmetic`: `neg`, `add`, `sub`, `mul`, `div`, `pow`, `rem` over any
//!   `num_traits::Float`.
//! - `comparison`: `eq`, `ne`, `lt`, `le`, `gt`, `ge` returning `bool`.
//! - `logical`: `not` over `bool`.

pub mod arithmetic;
pub mod comparison;
pub mod logical;
