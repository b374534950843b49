// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use gf2_config::AppConfig;
use gf2_polynomial::{GaloisField, Polynomial};

use crate::output::render;

pub fn execute(config: &AppConfig, coefficients: &[u64], at: &[u64]) -> Result<String> {
    let field = config.field()?;
    for value in coefficients.iter().chain(at) {
        if !field.contains(*value) {
            bail!("{value} is not an element of {field}");
        }
    }

    let poly = Polynomial::new(coefficients.to_vec());
    let values: Vec<u64> = at.iter().map(|x| poly.evaluate(*x, &field)).collect();
    render(config.output(), "values", &values)
}
