// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Extended Euclidean algorithm with an early stopping degree.
//!
//! Stopping as soon as the remainder degree falls below a threshold, instead of running to the
//! true gcd, is how bounded-degree error locator and evaluator polynomials are recovered from
//! the key equation.

use crate::errors::PolynomialError;
use crate::polynomial::Polynomial;
use gf2_field::GaloisField;
use std::mem;

/// Output of [`extended_euclid`]: `a·u + b·v = gcd`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bezout {
    /// The first remainder whose degree fell below the stopping degree.
    pub gcd: Polynomial,
    pub u: Polynomial,
    pub v: Polynomial,
    /// Number of division steps performed.
    pub iterations: usize,
}

/// One running triple `(r, s, t)` with `a·s + b·t = r`.
#[derive(Debug, Default)]
struct Row {
    r: Polynomial,
    s: Polynomial,
    t: Polynomial,
}

fn below_stop(poly: &Polynomial, stop: usize) -> bool {
    poly.degree().map_or(true, |d| d < stop)
}

/// Runs the extended Euclidean algorithm on `(a, b)` until the remainder degree drops below
/// `stop`.
///
/// The zero polynomial counts as below every stopping degree. If `b` is already below `stop`
/// no division happens and the result is `(b, 0, 1)`. At most `deg(b) + 1` division steps run.
///
/// # Errors
///
/// - `PolynomialError::InvalidPolynomial` if `deg(a) < deg(b)`.
/// - `PolynomialError::DivisionByZero` if a division step cannot invert a leading coefficient.
pub fn extended_euclid<F: GaloisField>(
    field: &F,
    a: Polynomial,
    b: Polynomial,
    stop: usize,
) -> Result<Bezout, PolynomialError> {
    if b.degree() > a.degree() {
        return Err(PolynomialError::invalid_polynomial(format!(
            "extended Euclid requires deg(a) >= deg(b), got {:?} < {:?}",
            a.degree(),
            b.degree()
        )));
    }

    let mut rows = [
        Row {
            r: a,
            s: Polynomial::one(),
            t: Polynomial::zero(),
        },
        Row {
            r: b,
            s: Polynomial::zero(),
            t: Polynomial::one(),
        },
    ];

    // `prev` indexes the row in the role of (r0, s0, t0), the other one is (r1, s1, t1)
    let mut prev = 0;
    let mut iterations = 0;

    while !below_stop(&rows[1 - prev].r, stop) {
        let next = 1 - prev;
        let (quotient, remainder) = rows[prev].r.div_rem(&rows[next].r, field)?;
        let qs = quotient.mul(&rows[next].s, field);
        let qt = quotient.mul(&rows[next].t, field);

        let row = &mut rows[prev];
        row.r = remainder;
        row.s.sub_assign(&qs, field);
        row.t.sub_assign(&qt, field);
        row.s.normalize();
        row.t.normalize();

        // The updated row becomes r1, the old r1 becomes r0
        prev = next;
        iterations += 1;
    }

    let last = mem::take(&mut rows[1 - prev]);
    Ok(Bezout {
        gcd: last.r,
        u: last.s,
        v: last.t,
        iterations,
    })
}
