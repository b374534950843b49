// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Random messages, Reed-Solomon encoding and channel noise for tests.

use gf2_field::{Element, GaloisField};
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;

/// A message polynomial and its evaluations at distinct points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Codeword {
    /// Coefficients low-to-high, `k + 1` of them.
    pub message: Vec<Element>,
    pub xs: Vec<Element>,
    pub ys: Vec<Element>,
}

impl Codeword {
    /// Encodes a random degree-`k` message at `n` random distinct points.
    pub fn random<F: GaloisField, R: Rng>(rng: &mut R, field: &F, k: usize, n: usize) -> Self {
        let message = random_message(rng, field, k);
        let xs = distinct_points(rng, field, n);
        let ys = encode(field, &message, &xs);
        Self { message, xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> Vec<(Element, Element)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }

    /// The message zero-padded to the codeword length, as returned by the decoder.
    pub fn padded_message(&self) -> Vec<Element> {
        let mut padded = self.message.clone();
        padded.resize(self.len().max(padded.len()), 0);
        padded
    }
}

/// Uniform field element.
pub fn random_element<F: GaloisField, R: Rng>(rng: &mut R, field: &F) -> Element {
    let lgsize = field.lgsize();
    rng.gen::<u64>() & ((1u64 << lgsize) - 1)
}

/// Random message of degree exactly `k`.
pub fn random_message<F: GaloisField, R: Rng>(rng: &mut R, field: &F, k: usize) -> Vec<Element> {
    let mut message: Vec<Element> = (0..=k).map(|_| random_element(rng, field)).collect();
    while message[k] == 0 {
        message[k] = random_element(rng, field);
    }
    message
}

/// `n` pairwise distinct field elements. Panics if the field has fewer than `n` elements.
pub fn distinct_points<F: GaloisField, R: Rng>(rng: &mut R, field: &F, n: usize) -> Vec<Element> {
    let lgsize = field.lgsize();
    if lgsize < 16 {
        let order = 1usize << lgsize;
        assert!(n <= order, "GF(2^{lgsize}) has fewer than {n} elements");
        return index::sample(rng, order, n)
            .into_iter()
            .map(|i| i as Element)
            .collect();
    }

    let mut seen = HashSet::with_capacity(n);
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let x = random_element(rng, field);
        if seen.insert(x) {
            points.push(x);
        }
    }
    points
}

/// Evaluates `message` at every point with Horner's rule.
pub fn encode<F: GaloisField>(field: &F, message: &[Element], xs: &[Element]) -> Vec<Element> {
    xs.iter()
        .map(|&x| {
            message
                .iter()
                .rev()
                .fold(0, |acc, c| field.add(field.mul(acc, x), *c))
        })
        .collect()
}

/// Alters `t` distinct symbols to a different value and returns their positions.
pub fn corrupt<F: GaloisField, R: Rng>(
    rng: &mut R,
    field: &F,
    ys: &mut [Element],
    t: usize,
) -> Vec<usize> {
    let positions = index::sample(rng, ys.len(), t).into_vec();
    for &i in &positions {
        let mut noise = 0;
        while noise == 0 {
            noise = random_element(rng, field);
        }
        ys[i] = field.add(ys[i], noise);
    }
    positions
}

/// Erases `d` symbols, skipping the positions in `keep`.
pub fn erase<R: Rng>(
    rng: &mut R,
    points: &[(Element, Element)],
    d: usize,
    keep: &[usize],
) -> Vec<(Element, Option<Element>)> {
    let candidates: Vec<usize> = (0..points.len()).filter(|i| !keep.contains(i)).collect();
    let erased: HashSet<usize> = index::sample(rng, candidates.len(), d)
        .into_iter()
        .map(|i| candidates[i])
        .collect();

    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| (x, (!erased.contains(&i)).then_some(y)))
        .collect()
}
