// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use gf2_config::AppConfig;
use gf2_polynomial::{decode_reed_solomon, decode_reed_solomon_with_erasures};
use tracing::info;

use crate::output::render;
use crate::points::PointsInput;

pub fn execute(config: &AppConfig, input: &PointsInput) -> Result<String> {
    let field = config.field()?;
    let k = config
        .degree_bound()
        .context("No degree bound given. Pass -k or set degree_bound in the configuration")?;
    let points = input.load()?;
    let erasures = points.iter().filter(|(_, y)| y.is_none()).count();
    info!(%field, k, points = points.len(), erasures, "Decoding");

    let coefficients = if erasures == 0 {
        let complete: Vec<_> = points.iter().filter_map(|&(x, y)| Some((x, y?))).collect();
        decode_reed_solomon(&complete, k, field.modulus())?
    } else {
        decode_reed_solomon_with_erasures(&points, k, field.modulus())?
    };
    render(config.output(), "coefficients", &coefficients)
}
