// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::helpers::telemetry::setup_simple_tracing;
use crate::points::PointsInput;
use crate::{decode, eval, interpolate, print_config};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use gf2_config::validation::{parse_u64_literal, Modulus};
use gf2_config::{load_config, AppConfig, CliOverrides, OutputFormat};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "gf2poly")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_SHA"), ")"))]
#[command(about = "Lagrange interpolation and Reed-Solomon decoding over GF(2^n)", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Field modulus as an integer or a `0x`/`0b` literal. Eg. `0x11b` for GF(256)
    #[arg(short, long, global = true)]
    modulus: Option<Modulus>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `gf2poly -vvv` will give
    /// you trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    /// Flags win over the configured level, which defaults to warnings only
    pub fn log_level(&self, config: &AppConfig) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => config.log_level().into(),
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    pub fn execute(self) -> Result<()> {
        let config = self.load_config()?;
        setup_simple_tracing(self.log_level(&config));
        info!("Config loaded from: {:?}", config.config_file());

        let output = self.run(&config)?;
        println!("{}", output);
        Ok(())
    }

    /// Runs the command and returns what should be printed
    pub fn run(&self, config: &AppConfig) -> Result<String> {
        match &self.command {
            Commands::Interpolate { input } => interpolate::execute(config, input),
            Commands::Decode { input, .. } => decode::execute(config, input),
            Commands::Eval { coefficients, at } => eval::execute(config, coefficients, at),
            Commands::Config => print_config::execute(config),
        }
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        load_config(self.config.as_deref(), self.overrides())
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            modulus: self.modulus,
            degree_bound: match &self.command {
                Commands::Decode { degree_bound, .. } => *degree_bound,
                _ => None,
            },
            log_level: None,
            output: self.json.then_some(OutputFormat::Json),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interpolate the minimal-degree polynomial through a set of points
    Interpolate {
        #[command(flatten)]
        input: PointsInput,
    },

    /// Decode a Reed-Solomon codeword, correcting symbol errors and erasures
    Decode {
        /// Maximum degree of the message polynomial
        #[arg(short = 'k', long = "degree-bound")]
        degree_bound: Option<usize>,

        #[command(flatten)]
        input: PointsInput,
    },

    /// Evaluate a polynomial at one or more points
    Eval {
        /// Coefficient, constant term first. Repeat for every coefficient.
        #[arg(
            long = "coeff",
            value_parser = parse_u64_literal,
            action = ArgAction::Append,
            required = true
        )]
        coefficients: Vec<u64>,

        /// Point to evaluate at. Repeat for every point.
        #[arg(
            long = "at",
            value_parser = parse_u64_literal,
            action = ArgAction::Append,
            required = true
        )]
        at: Vec<u64>,
    },

    /// Print the effective configuration
    Config,
}
