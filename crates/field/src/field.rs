// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The field adapter contract.

use crate::errors::FieldError;
use std::fmt::Debug;

/// A field element in its packed integer representation.
pub type Element = u64;

/// Element arithmetic over one fixed field.
///
/// Implementors carry their modulus, so every operation is relative to the field the
/// adapter was built for. The additive identity is always `0` and the multiplicative
/// identity is always `1`.
///
/// Implementations must be stateless: the polynomial kernel calls them from any thread
/// without coordination.
pub trait GaloisField: Debug {
    /// Field addition.
    fn add(&self, a: Element, b: Element) -> Element;

    /// Field subtraction.
    fn sub(&self, a: Element, b: Element) -> Element;

    /// Field multiplication.
    fn mul(&self, a: Element, b: Element) -> Element;

    /// Field division.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] if `b` is the additive identity.
    fn div(&self, a: Element, b: Element) -> Result<Element, FieldError>;

    /// Raises `base` to `exponent`.
    fn pow(&self, base: Element, exponent: u64) -> Element;

    /// Bit length of the field modulus.
    fn bit_length(&self) -> u32;

    /// Number of bits an element occupies, `bit_length() - 1`.
    fn lgsize(&self) -> u32 {
        self.bit_length() - 1
    }

    /// Checks whether `a` is a valid element of this field.
    fn contains(&self, a: Element) -> bool;

    /// Additive inverse of `a`.
    fn neg(&self, a: Element) -> Element {
        self.sub(0, a)
    }

    /// Multiplicative inverse of `a`.
    fn inverse(&self, a: Element) -> Result<Element, FieldError> {
        self.div(1, a)
    }
}

impl<F: GaloisField + ?Sized> GaloisField for &F {
    fn add(&self, a: Element, b: Element) -> Element {
        (**self).add(a, b)
    }

    fn sub(&self, a: Element, b: Element) -> Element {
        (**self).sub(a, b)
    }

    fn mul(&self, a: Element, b: Element) -> Element {
        (**self).mul(a, b)
    }

    fn div(&self, a: Element, b: Element) -> Result<Element, FieldError> {
        (**self).div(a, b)
    }

    fn pow(&self, base: Element, exponent: u64) -> Element {
        (**self).pow(base, exponent)
    }

    fn bit_length(&self) -> u32 {
        (**self).bit_length()
    }

    fn contains(&self, a: Element) -> bool {
        (**self).contains(a)
    }
}
