// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Reference GF(2^n) adapter over `u64` elements.

use crate::errors::FieldError;
use crate::field::{Element, GaloisField};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary extension field defined by a modulus polynomial over GF(2).
///
/// Elements are reduced polynomials packed into the low `lgsize` bits of a `u64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gf2Field {
    modulus: u64,
    lgsize: u32,
}

impl fmt::Display for Gf2Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{}) mod {:#x}", self.lgsize, self.modulus)
    }
}

impl Gf2Field {
    /// Creates the field defined by `modulus`.
    ///
    /// The modulus is not checked for irreducibility; use [`Gf2Field::new_irreducible`]
    /// when it comes from an untrusted source.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidModulus`] if the modulus has degree zero.
    pub fn new(modulus: u64) -> Result<Self, FieldError> {
        if modulus < 2 {
            return Err(FieldError::invalid_modulus(
                modulus,
                "modulus must have degree at least 1",
            ));
        }

        Ok(Self {
            modulus,
            lgsize: poly_degree(modulus),
        })
    }

    /// Creates the field defined by `modulus`, rejecting reducible moduli.
    pub fn new_irreducible(modulus: u64) -> Result<Self, FieldError> {
        let field = Self::new(modulus)?;
        if !field.is_irreducible() {
            return Err(FieldError::invalid_modulus(
                modulus,
                "modulus is reducible over GF(2)",
            ));
        }
        Ok(field)
    }

    /// Returns the modulus polynomial.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces an arbitrary GF(2) polynomial modulo the field modulus.
    pub fn reduce(&self, value: u64) -> Element {
        poly_mod(value, self.modulus)
    }

    /// Rabin's irreducibility test.
    ///
    /// A modulus `f` of degree `n` is irreducible iff `x^(2^n) = x (mod f)` and
    /// `gcd(x^(2^(n/p)) - x, f) = 1` for every prime `p` dividing `n`.
    pub fn is_irreducible(&self) -> bool {
        let n = self.lgsize;
        let x = self.reduce(0b10);
        let frobenius = |k: u32| (0..k).fold(x, |acc, _| self.mul(acc, acc));

        if frobenius(n) != x {
            return false;
        }

        prime_factors(n)
            .into_iter()
            .all(|p| poly_gcd(self.modulus, frobenius(n / p) ^ x) == 1)
    }

    fn mask(&self) -> u64 {
        (1u64 << self.lgsize) - 1
    }
}

impl GaloisField for Gf2Field {
    fn add(&self, a: Element, b: Element) -> Element {
        (a ^ b) & self.mask()
    }

    fn sub(&self, a: Element, b: Element) -> Element {
        self.add(a, b)
    }

    fn mul(&self, a: Element, b: Element) -> Element {
        debug_assert!(self.contains(a) && self.contains(b));
        let top = 1u64 << self.lgsize;
        let mut a = a;
        let mut b = b;
        let mut result = 0;

        while b != 0 {
            if b & 1 == 1 {
                result ^= a;
            }
            b >>= 1;
            a <<= 1;
            if a & top != 0 {
                a ^= self.modulus;
            }
        }

        result
    }

    fn div(&self, a: Element, b: Element) -> Result<Element, FieldError> {
        if b == 0 {
            return Err(FieldError::DivisionByZero);
        }

        // b^(2^n - 2) is the inverse whenever the modulus is irreducible
        let inverse = self.pow(b, (1u64 << self.lgsize) - 2);
        if self.mul(b, inverse) != 1 {
            return Err(FieldError::NotInvertible {
                element: b,
                modulus: self.modulus,
            });
        }

        Ok(self.mul(a, inverse))
    }

    fn pow(&self, base: Element, exponent: u64) -> Element {
        let mut result = 1;
        let mut base = base;
        let mut exponent = exponent;

        while exponent != 0 {
            if exponent & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exponent >>= 1;
        }

        result
    }

    fn bit_length(&self) -> u32 {
        self.lgsize + 1
    }

    fn lgsize(&self) -> u32 {
        self.lgsize
    }

    fn contains(&self, a: Element) -> bool {
        a >> self.lgsize == 0
    }
}

/// Degree of a nonzero GF(2) polynomial packed into a `u64`.
fn poly_degree(p: u64) -> u32 {
    63 - p.leading_zeros()
}

fn poly_mod(mut a: u64, b: u64) -> u64 {
    let db = poly_degree(b);
    while a != 0 && poly_degree(a) >= db {
        a ^= b << (poly_degree(a) - db);
    }
    a
}

fn poly_gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = poly_mod(a, b);
        a = b;
        b = r;
    }
    a
}

fn prime_factors(mut n: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    let mut p = 2;
    while p * p <= n {
        if n % p == 0 {
            factors.push(p);
            while n % p == 0 {
                n /= p;
            }
        }
        p += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}
