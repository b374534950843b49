// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial buffer and arithmetic kernel over a GF(2^n) field adapter.

use crate::errors::PolynomialError;
use gf2_field::{Element, GaloisField};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial over a field, coefficients in ascending order of degree.
///
/// The coefficients live in a window `[start, start + len)` of a backing vector. Slots below
/// `start` are headroom: [`Polynomial::multiply_by_linear`] grows the window downwards into
/// them instead of shifting every coefficient up.
///
/// `len - 1` is the tracked degree. It can overstate the true degree after an operation
/// cancels leading terms; [`Polynomial::degree`] always scans for the highest nonzero
/// coefficient and [`Polynomial::normalize`] trims the window to it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Element>", into = "Vec<Element>")
)]
pub struct Polynomial {
    coefficients: Vec<Element>,
    start: usize,
    len: usize,
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Polynomial {}

impl From<Vec<Element>> for Polynomial {
    fn from(coefficients: Vec<Element>) -> Self {
        Polynomial::new(coefficients)
    }
}

impl From<Polynomial> for Vec<Element> {
    fn from(poly: Polynomial) -> Self {
        poly.significant().to_vec()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (degree, coeff) in self.significant().iter().enumerate().rev() {
            if *coeff == 0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            if degree == 0 || *coeff != 1 {
                write!(f, "{coeff}")?;
            }

            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending order of degree.
    pub fn new(coefficients: Vec<Element>) -> Self {
        let len = coefficients.len();
        Self {
            coefficients,
            start: 0,
            len,
        }
    }

    /// Creates the zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates a zero polynomial with `len` coefficient slots, used as preallocated storage.
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0; len])
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: Element) -> Self {
        Self::new(vec![constant])
    }

    /// Creates the constant polynomial `1`.
    pub fn one() -> Self {
        Self::constant(1)
    }

    /// Creates the constant polynomial `1` with `headroom` free slots below the constant
    /// term, enough for that many calls to [`Polynomial::multiply_by_linear`].
    pub fn with_headroom(headroom: usize) -> Self {
        let mut poly = Self::zero();
        poly.reset_with_headroom(headroom);
        poly
    }

    /// Resets this buffer to the constant `1` with `headroom` free leading slots, keeping
    /// the allocation.
    pub fn reset_with_headroom(&mut self, headroom: usize) {
        self.coefficients.clear();
        self.coefficients.resize(headroom + 1, 0);
        self.coefficients[headroom] = 1;
        self.start = headroom;
        self.len = 1;
    }

    /// Number of free slots below the constant term.
    pub fn headroom(&self) -> usize {
        self.start
    }

    /// Number of tracked coefficient slots, including leading zeros not yet trimmed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no coefficient slot is tracked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the tracked coefficients in ascending order of degree.
    pub fn coefficients(&self) -> &[Element] {
        &self.coefficients[self.start..self.start + self.len]
    }

    fn coefficients_mut(&mut self) -> &mut [Element] {
        &mut self.coefficients[self.start..self.start + self.len]
    }

    /// Returns the coefficient of `x^index`, zero past the tracked length.
    pub fn coefficient(&self, index: usize) -> Element {
        self.coefficients().get(index).copied().unwrap_or(0)
    }

    /// Returns the coefficients up to and including the true leading term.
    fn significant(&self) -> &[Element] {
        let end = self.degree().map_or(0, |d| d + 1);
        &self.coefficients()[..end]
    }

    /// Returns the true degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients().iter().rposition(|c| *c != 0)
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.degree().is_none()
    }

    /// Returns the leading coefficient, `None` for the zero polynomial.
    pub fn leading_coefficient(&self) -> Option<Element> {
        self.degree().map(|d| self.coefficient(d))
    }

    /// Trims the tracked length down to the true degree.
    pub fn normalize(&mut self) {
        self.len = self.degree().map_or(0, |d| d + 1);
    }

    /// Extends the tracked length to `len`, zeroing the new slots.
    fn grow_to(&mut self, len: usize) {
        if len <= self.len {
            return;
        }
        let end = self.start + len;
        if self.coefficients.len() < end {
            self.coefficients.resize(end, 0);
        }
        self.coefficients[self.start + self.len..end].fill(0);
        self.len = len;
    }

    /// Returns the significant coefficients zero-padded to at least `len` entries.
    pub fn to_padded(&self, len: usize) -> Vec<Element> {
        let mut out = self.significant().to_vec();
        if out.len() < len {
            out.resize(len, 0);
        }
        out
    }

    /// Adds `other` into this polynomial, zero-extending the shorter operand.
    pub fn add_assign<F: GaloisField>(&mut self, other: &Self, field: &F) {
        self.combine_assign(other, |a, b| field.add(a, b));
    }

    /// Subtracts `other` from this polynomial, zero-extending the shorter operand.
    pub fn sub_assign<F: GaloisField>(&mut self, other: &Self, field: &F) {
        self.combine_assign(other, |a, b| field.sub(a, b));
    }

    fn combine_assign(&mut self, other: &Self, op: impl Fn(Element, Element) -> Element) {
        self.grow_to(other.len);
        let lhs = self.coefficients_mut();
        for (a, b) in lhs.iter_mut().zip(other.coefficients()) {
            *a = op(*a, *b);
        }
        // Coefficients of `self` past `other.len` are combined with an implicit zero
        for a in lhs.iter_mut().skip(other.len) {
            *a = op(*a, 0);
        }
    }

    /// Returns the sum of two polynomials.
    pub fn add<F: GaloisField>(&self, other: &Self, field: &F) -> Self {
        let mut result = self.clone();
        result.add_assign(other, field);
        result
    }

    /// Returns the difference of two polynomials.
    pub fn sub<F: GaloisField>(&self, other: &Self, field: &F) -> Self {
        let mut result = self.clone();
        result.sub_assign(other, field);
        result
    }

    /// Multiplies every coefficient by the constant `c`.
    pub fn scale<F: GaloisField>(&mut self, c: Element, field: &F) {
        for coeff in self.coefficients_mut() {
            *coeff = field.mul(*coeff, c);
        }
    }

    /// Divides every coefficient by the constant `d`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if `d` is zero.
    pub fn divide_by_constant<F: GaloisField>(
        &mut self,
        d: Element,
        field: &F,
    ) -> Result<(), PolynomialError> {
        let inverse = field.inverse(d)?;
        self.scale(inverse, field);
        Ok(())
    }

    /// Multiplies this polynomial in place by the linear factor `a + b·x`.
    ///
    /// The product is written one slot below the current constant term and the window start
    /// moves down by one, so no coefficient is shifted.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InsufficientHeadroom` if there is no free slot below the
    /// constant term.
    pub fn multiply_by_linear<F: GaloisField>(
        &mut self,
        a: Element,
        b: Element,
        field: &F,
    ) -> Result<(), PolynomialError> {
        if self.start == 0 {
            return Err(PolynomialError::InsufficientHeadroom {
                required: 1,
                available: 0,
            });
        }

        let base = self.start - 1;
        let len = self.len;
        let slots = &mut self.coefficients[base..base + len + 1];

        // new[i] = a·old[i] + b·old[i-1], where old[i] sits at slots[i + 1]
        let mut previous = 0;
        for i in 0..=len {
            let current = if i < len { slots[i + 1] } else { 0 };
            slots[i] = field.add(field.mul(a, current), field.mul(b, previous));
            previous = current;
        }

        self.start = base;
        self.len = len + 1;
        Ok(())
    }

    /// Multiplies two polynomials by direct convolution.
    ///
    /// The product is allocated with exactly `deg(self) + deg(other) + 1` slots.
    pub fn mul<F: GaloisField>(&self, other: &Self, field: &F) -> Self {
        let (Some(dp), Some(dq)) = (self.degree(), other.degree()) else {
            return Polynomial::zero();
        };

        let p = self.coefficients();
        let q = other.coefficients();
        let mut product = vec![0; dp + dq + 1];

        for d in (0..=dp + dq).rev() {
            let lo = d.saturating_sub(dq);
            let hi = d.min(dp);
            product[d] = (lo..=hi).fold(0, |acc, i| field.add(acc, field.mul(p[i], q[d - i])));
        }

        Polynomial::new(product)
    }

    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is the zero polynomial or its
    /// leading coefficient cannot be inverted.
    pub fn div_rem<F: GaloisField>(
        &self,
        divisor: &Self,
        field: &F,
    ) -> Result<(Self, Self), PolynomialError> {
        let Some(dd) = divisor.degree() else {
            return Err(PolynomialError::division_by_zero("zero polynomial divisor"));
        };
        let d = &divisor.coefficients()[..=dd];
        let lead = d[dd];

        let mut remainder = self.significant().to_vec();
        let Some(mut rd) = remainder.len().checked_sub(1) else {
            return Ok((Polynomial::zero(), Polynomial::zero()));
        };
        if rd < dd {
            return Ok((Polynomial::zero(), Polynomial::new(remainder)));
        }

        let mut quotient = vec![0; rd - dd + 1];
        loop {
            let s = field.div(remainder[rd], lead)?;
            let shift = rd - dd;
            quotient[shift] = field.add(quotient[shift], s);

            for (j, dj) in d.iter().enumerate() {
                let r = &mut remainder[shift + j];
                *r = field.sub(*r, field.mul(s, *dj));
            }
            debug_assert_eq!(remainder[rd], 0);

            // Rescan below the cancelled leading term
            match remainder[..rd].iter().rposition(|c| *c != 0) {
                Some(next) if next >= dd => rd = next,
                Some(next) => {
                    remainder.truncate(next + 1);
                    break;
                }
                None => {
                    remainder.clear();
                    break;
                }
            }
        }

        Ok((Polynomial::new(quotient), Polynomial::new(remainder)))
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn evaluate<F: GaloisField>(&self, x: Element, field: &F) -> Element {
        self.coefficients()
            .iter()
            .rev()
            .fold(0, |acc, c| field.add(field.mul(acc, x), *c))
    }
}
