// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use gf2_config::AppConfig;
use tracing::info;

use crate::output::render;
use crate::points::{require_complete, PointsInput};

pub fn execute(config: &AppConfig, input: &PointsInput) -> Result<String> {
    let field = config.field()?;
    let points = require_complete(&input.load()?)?;
    info!(%field, points = points.len(), "Interpolating");

    let coefficients = gf2_polynomial::interpolate(&points, field.modulus())?;
    render(config.output(), "coefficients", &coefficients)
}
