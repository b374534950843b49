// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Flat entry points taking integer points and a field modulus.
//!
//! Results are `n` coefficients, constant term first, where `n` is the number of input points.
//! The modulus must be irreducible, so every nonzero difference of x-coordinates is invertible.

use crate::errors::DecodeResult;
use crate::interpolate::interpolate_polynomial;
use crate::observer::TracingObserver;
use crate::reed_solomon::ReedSolomonDecoder;
use crate::samples::SampleSet;
use gf2_field::Gf2Field;
use tracing::debug;

/// Interpolates the minimal-degree polynomial through `points` in the field defined by
/// `modulus`.
pub fn interpolate(points: &[(u64, u64)], modulus: u64) -> DecodeResult<Vec<u64>> {
    debug!(points = points.len(), modulus, "Interpolating");
    let field = Gf2Field::new_irreducible(modulus)?;
    let samples = SampleSet::from_points(&field, points)?;
    let (xs, ys) = samples.present();
    let poly = interpolate_polynomial(&field, &xs, &ys)?;
    Ok(poly.to_padded(samples.len()))
}

/// Decodes a Reed-Solomon codeword whose message has degree at most `k`.
pub fn decode_reed_solomon(
    points: &[(u64, u64)],
    k: usize,
    modulus: u64,
) -> DecodeResult<Vec<u64>> {
    debug!(points = points.len(), k, modulus, "Decoding Reed-Solomon codeword");
    let field = Gf2Field::new_irreducible(modulus)?;
    let samples = SampleSet::from_points(&field, points)?;
    decode(field, k, &samples)
}

/// Decodes a Reed-Solomon codeword where `None` marks an erased symbol.
pub fn decode_reed_solomon_with_erasures(
    points: &[(u64, Option<u64>)],
    k: usize,
    modulus: u64,
) -> DecodeResult<Vec<u64>> {
    debug!(
        points = points.len(),
        k,
        modulus,
        "Decoding Reed-Solomon codeword with erasures"
    );
    let field = Gf2Field::new_irreducible(modulus)?;
    let samples = SampleSet::from_partial_points(&field, points)?;
    decode(field, k, &samples)
}

fn decode(field: Gf2Field, k: usize, samples: &SampleSet) -> DecodeResult<Vec<u64>> {
    let report = ReedSolomonDecoder::new(field, k)
        .with_observer(TracingObserver)
        .decode(samples)?;
    Ok(report.coefficients())
}
