// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

// Generates a noisy Reed-Solomon codeword as a `gf2poly` input file
use anyhow::{bail, Result};
use clap::Parser;
use gf2_field::Gf2Field;
use gf2_test_helpers::{corrupt, create_rng_from_u64, erase, write_points_file, Codeword};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Field modulus, e.g. 283 for GF(256)
    #[arg(short, long, default_value_t = 0x11b)]
    modulus: u64,

    /// Message degree bound
    #[arg(short)]
    k: usize,

    /// Number of symbols
    #[arg(short)]
    n: usize,

    #[arg(long, default_value_t = 0)]
    errors: usize,

    #[arg(long, default_value_t = 0)]
    erasures: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.k >= args.n || args.errors + args.erasures > args.n {
        bail!("need k < n and errors + erasures <= n");
    }

    let field = Gf2Field::new_irreducible(args.modulus)?;
    let mut rng = create_rng_from_u64(args.seed);

    let codeword = Codeword::random(&mut rng, &field, args.k, args.n);
    println!("Message: {:?}", codeword.message);

    let mut ys = codeword.ys.clone();
    let positions = corrupt(&mut rng, &field, &mut ys, args.errors);
    println!("Corrupted positions: {:?}", positions);

    let points: Vec<_> = codeword.xs.iter().copied().zip(ys).collect();
    let received = erase(&mut rng, &points, args.erasures, &positions);
    write_points_file(&args.output, &received)?;
    println!("Created {}", args.output.display());

    Ok(())
}
