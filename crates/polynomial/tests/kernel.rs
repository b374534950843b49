// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use gf2_polynomial::{
    extended_euclid, interpolate_polynomial, Gf2Field, Polynomial, PolynomialError,
};
use proptest::prelude::*;

const GF256: u64 = 0x11b;

fn field() -> Gf2Field {
    Gf2Field::new(GF256).unwrap()
}

fn coefficients(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..256, 0..max_len)
}

#[test]
fn test_coincident_points_fail_in_kernel() {
    let err = interpolate_polynomial(&field(), &[7, 9, 7], &[1, 2, 3]).unwrap_err();
    assert!(matches!(err, PolynomialError::DivisionByZero { .. }));
}

#[test]
fn test_linear_multiply_without_headroom() {
    let mut poly = Polynomial::new(vec![1, 2, 3]);
    assert!(matches!(
        poly.multiply_by_linear(1, 1, &field()),
        Err(PolynomialError::InsufficientHeadroom { .. })
    ));
}

proptest! {
    #[test]
    fn division_reconstructs_dividend(n in coefficients(24), d in coefficients(12)) {
        let field = field();
        let dividend = Polynomial::new(n);
        let divisor = Polynomial::new(d);
        prop_assume!(!divisor.is_zero());

        let (quotient, remainder) = dividend.div_rem(&divisor, &field).unwrap();
        prop_assert!(remainder.degree() < divisor.degree());
        prop_assert_eq!(quotient.mul(&divisor, &field).add(&remainder, &field), dividend);
    }

    #[test]
    fn multiplication_degree_adds(p in coefficients(16), q in coefficients(16)) {
        let field = field();
        let p = Polynomial::new(p);
        let q = Polynomial::new(q);
        let product = p.mul(&q, &field);

        match (p.degree(), q.degree()) {
            (Some(dp), Some(dq)) => prop_assert_eq!(product.degree(), Some(dp + dq)),
            _ => prop_assert!(product.is_zero()),
        }
        prop_assert_eq!(product, q.mul(&p, &field));
    }

    #[test]
    fn addition_is_self_inverse(p in coefficients(16), q in coefficients(16)) {
        let field = field();
        let p = Polynomial::new(p);
        let q = Polynomial::new(q);
        prop_assert_eq!(p.add(&q, &field).sub(&q, &field), p.clone());
        prop_assert!(p.sub(&p, &field).is_zero());
    }

    #[test]
    fn euclid_satisfies_bezout_identity(
        a in coefficients(16),
        b in coefficients(16),
        stop in 0usize..16,
    ) {
        let field = field();
        let (a, b) = {
            let (a, b) = (Polynomial::new(a), Polynomial::new(b));
            if b.degree() > a.degree() { (b, a) } else { (a, b) }
        };

        let out = extended_euclid(&field, a.clone(), b.clone(), stop).unwrap();
        let combination = a.mul(&out.u, &field).add(&b.mul(&out.v, &field), &field);
        prop_assert_eq!(combination, out.gcd.clone());
        prop_assert!(out.gcd.degree().map_or(true, |d| d < stop));
        prop_assert!(out.iterations <= b.degree().map_or(0, |d| d + 1));
    }
}
