// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::Path;

use super::write_file_with_dirs;
use anyhow::{Context, Result};
use gf2_field::Element;
use serde::Serialize;
use tracing::info;

/// JSON input accepted by the `gf2poly` CLI: `{"points": [[x, y], [x, null]]}`.
#[derive(Debug, Serialize)]
struct PointsFile<'a> {
    points: &'a [(Element, Option<Element>)],
}

/// Writes received points, with `None` for erased symbols, as a CLI input file.
pub fn write_points_file(path: &Path, points: &[(Element, Option<Element>)]) -> Result<()> {
    let content = serde_json::to_vec_pretty(&PointsFile { points })
        .context("Could not serialize points")?;
    write_file_with_dirs(path, &content)
        .with_context(|| format!("Could not write points to {}", path.display()))?;
    info!(path = %path.display(), points = points.len(), "Wrote points file");
    Ok(())
}
