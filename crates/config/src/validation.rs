// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::{fmt, str::FromStr};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Parses an unsigned integer written in decimal, `0x` hex or `0b` binary.
pub fn parse_u64_literal(s: &str) -> anyhow::Result<u64> {
    let s = s.trim().replace('_', "");
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or(s.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or(s.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (s.as_str(), 10)
    };

    if digits.is_empty() {
        bail!("empty integer literal");
    }
    u64::from_str_radix(digits, radix).with_context(|| format!("invalid integer literal '{s}'"))
}

/// A field modulus as written in configuration: an integer or a `0x`/`0b` literal string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ModulusRepr", into = "u64")]
pub struct Modulus(u64);

#[derive(Deserialize)]
#[serde(untagged)]
enum ModulusRepr {
    Int(u64),
    Text(String),
}

impl Modulus {
    pub fn new(value: u64) -> Self {
        Modulus(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for Modulus {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_u64_literal(s)?;
        if value < 2 {
            bail!("modulus {value} has degree zero");
        }
        Ok(Modulus(value))
    }
}

impl TryFrom<ModulusRepr> for Modulus {
    type Error = anyhow::Error;
    fn try_from(repr: ModulusRepr) -> Result<Self, Self::Error> {
        match repr {
            ModulusRepr::Int(value) => Modulus::from_str(&value.to_string()),
            ModulusRepr::Text(text) => Modulus::from_str(&text),
        }
    }
}

impl From<Modulus> for u64 {
    fn from(value: Modulus) -> Self {
        value.0
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
