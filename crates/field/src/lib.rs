// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # GF(2^n) Field Arithmetic
//!
//! Element-level arithmetic for binary extension fields, consumed by the polynomial
//! kernel through the [`GaloisField`] trait.
//!
//! ## Representation
//!
//! An element of GF(2^n) is a polynomial over GF(2) of degree below `n`, packed into a
//! `u64` where bit `i` holds the coefficient of `x^i`. The field itself is fixed by an
//! irreducible modulus of bit length `n + 1`:
//!
//! ```text
//! 0b1011      = x^3 + x + 1            -> GF(8)
//! 0x11b       = x^8 + x^4 + x^3 + x + 1 -> GF(256)
//! 0x1020609b3 = (degree 32)            -> GF(2^32)
//! ```
//!
//! Addition and subtraction are both XOR. Multiplication is carry-less and reduced by the
//! modulus. Division multiplies by the inverse `a^(2^n - 2)`.
//!
//! Moduli up to degree 63 are supported, so every element fits in a `u64`.

mod errors;
mod field;
mod gf2;

pub use errors::FieldError;
pub use field::{Element, GaloisField};
pub use gf2::Gf2Field;
