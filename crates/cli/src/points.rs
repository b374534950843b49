// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use gf2_config::validation::parse_u64_literal;
use serde::Deserialize;

/// A received point, `None` for an erased symbol
pub type Point = (u64, Option<u64>);

#[derive(Args, Debug, Clone)]
pub struct PointsInput {
    /// A sample as `x,y`. Use `x,-` for an erased symbol. Repeat for every point.
    #[arg(
        long = "point",
        value_name = "X,Y",
        value_parser = parse_point,
        action = clap::ArgAction::Append,
    )]
    pub points: Vec<Point>,

    /// Read points from a JSON file of the form `{"points": [[x, y], [x, null]]}`
    #[arg(long, short = 'i', conflicts_with = "points")]
    pub input: Option<PathBuf>,
}

#[derive(Deserialize)]
struct PointsFile {
    points: Vec<Point>,
}

impl PointsInput {
    pub fn load(&self) -> Result<Vec<Point>> {
        let points = match &self.input {
            Some(path) => {
                let content = fs::read(path)
                    .with_context(|| format!("Could not read points from {}", path.display()))?;
                let file: PointsFile = serde_json::from_slice(&content)
                    .with_context(|| format!("Could not parse points in {}", path.display()))?;
                file.points
            }
            None => self.points.clone(),
        };

        if points.is_empty() {
            bail!("No points given. Pass --point x,y or --input <file>");
        }
        Ok(points)
    }
}

/// Rejects erasures for commands that need every symbol.
pub fn require_complete(points: &[Point]) -> Result<Vec<(u64, u64)>> {
    points
        .iter()
        .map(|&(x, y)| match y {
            Some(y) => Ok((x, y)),
            None => bail!("Point at x = {x} is erased, erasures are only accepted by `decode`"),
        })
        .collect()
}

pub fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("point must be of the form x,y");
    };
    let x = parse_u64_literal(x)?;
    let y = match y.trim() {
        "-" | "_" => None,
        y => Some(parse_u64_literal(y)?),
    };
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf2_test_helpers::write_points_file;
    use tempfile::tempdir;

    #[test]
    fn test_parse_point() -> Result<()> {
        assert_eq!(parse_point("1,3")?, (1, Some(3)));
        assert_eq!(parse_point("0x10, 0b11")?, (16, Some(3)));
        assert_eq!(parse_point("4,-")?, (4, None));
        assert!(parse_point("4").is_err());
        assert!(parse_point("a,1").is_err());
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("points.json");
        write_points_file(&path, &[(1, Some(3)), (2, None), (3, Some(7))])?;

        let input = PointsInput {
            points: vec![],
            input: Some(path),
        };
        assert_eq!(input.load()?, vec![(1, Some(3)), (2, None), (3, Some(7))]);
        Ok(())
    }

    #[test]
    fn test_empty_and_erased_points() {
        let input = PointsInput {
            points: vec![],
            input: None,
        };
        assert!(input.load().is_err());
        assert!(require_complete(&[(1, Some(3)), (2, None)]).is_err());
        assert_eq!(
            require_complete(&[(1, Some(3))]).unwrap(),
            vec![(1, 3)]
        );
    }
}
