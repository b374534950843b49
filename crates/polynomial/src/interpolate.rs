// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lagrange interpolation over GF(2^n).

use crate::errors::PolynomialError;
use crate::polynomial::Polynomial;
use gf2_field::{Element, GaloisField};

/// Builds the minimal-degree polynomial `P` with `P(xs[i]) = ys[i]` for every sample.
///
/// Each basis polynomial `L_j(x) = Π_{i≠j} (x − x_i) / (x_j − x_i)` is built in one reused
/// buffer, interleaving the linear multiply and the constant divide, then `y_j · L_j` is
/// accumulated into the result. No `n×n` system is formed.
///
/// An empty sample set interpolates to the zero polynomial.
///
/// # Errors
///
/// - `PolynomialError::InvalidPolynomial` if `xs` and `ys` differ in length.
/// - `PolynomialError::DivisionByZero` if two x-coordinates coincide.
pub fn interpolate_polynomial<F: GaloisField>(
    field: &F,
    xs: &[Element],
    ys: &[Element],
) -> Result<Polynomial, PolynomialError> {
    if xs.len() != ys.len() {
        return Err(PolynomialError::invalid_polynomial(format!(
            "sample set has {} x-coordinates but {} y-values",
            xs.len(),
            ys.len()
        )));
    }

    let n = xs.len();
    let mut result = Polynomial::zeros(n);
    let mut basis = Polynomial::zero();

    for (j, (&xj, &yj)) in xs.iter().zip(ys).enumerate() {
        basis.reset_with_headroom(n.saturating_sub(1));

        for (i, &xi) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            let denominator = field.sub(xj, xi);
            if denominator == 0 {
                return Err(PolynomialError::division_by_zero(format!(
                    "x-coordinates at indices {} and {} coincide",
                    i.min(j),
                    i.max(j)
                )));
            }
            basis.multiply_by_linear(field.neg(xi), 1, field)?;
            basis.divide_by_constant(denominator, field)?;
        }

        basis.scale(yj, field);
        result.add_assign(&basis, field);
    }

    Ok(result)
}
