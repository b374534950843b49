// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use gf2_config::AppConfig;

pub fn execute(config: &AppConfig) -> Result<String> {
    config.to_yaml()
}
