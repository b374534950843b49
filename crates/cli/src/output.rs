// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use gf2_config::OutputFormat;
use serde_json::json;

/// Renders a list of field elements, space separated or as `{"<key>": [...]}`.
pub fn render(format: OutputFormat, key: &str, values: &[u64]) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => values
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(" "),
        OutputFormat::Json => serde_json::to_string(&json!({ key: values }))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() -> Result<()> {
        assert_eq!(render(OutputFormat::Plain, "coefficients", &[1, 2, 0])?, "1 2 0");
        assert_eq!(
            render(OutputFormat::Json, "coefficients", &[1, 2, 0])?,
            r#"{"coefficients":[1,2,0]}"#
        );
        Ok(())
    }
}
