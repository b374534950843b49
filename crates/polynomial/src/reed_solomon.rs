// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Reed-Solomon decoding by interpolation and the key equation (Gao's decoder).
//!
//! Given `n` received symbols at distinct evaluation points and a message degree bound `k`:
//!
//! 1. Interpolate the received word into `g1`. If `deg(g1) <= k` there is nothing to correct.
//! 2. Build the annihilator `g0 = Π (x - x_i)`.
//! 3. Run the extended Euclidean algorithm on `(g0, g1)` until the remainder `g` has degree at
//!    most `⌊(n + k) / 2⌋`, giving the error locator `v`.
//! 4. The message is `g / v`, which must divide exactly and have degree at most `k`.
//!
//! Up to `⌊(n - k - 1) / 2⌋` symbol errors are corrected. Erased symbols are dropped before
//! decoding, each one lowering the effective `n` by one.

use crate::errors::{DecodeError, DecodeResult};
use crate::euclid::extended_euclid;
use crate::interpolate::interpolate_polynomial;
use crate::observer::{DecodeEvent, DecodeObserver, NoopObserver};
use crate::polynomial::Polynomial;
use crate::samples::SampleSet;
use gf2_field::{Element, GaloisField};

/// The outcome of a successful decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeReport {
    /// The recovered message polynomial, of degree at most `k`.
    pub message: Polynomial,
    /// Number of received symbols that disagreed with the message.
    pub errors_corrected: usize,
    /// Number of erased symbols that were skipped.
    pub erasures: usize,
    /// Number of samples in the received word, erased ones included.
    pub samples: usize,
}

impl DecodeReport {
    /// Message coefficients low-to-high, zero-padded to the number of samples.
    pub fn coefficients(&self) -> Vec<Element> {
        self.message.to_padded(self.samples)
    }
}

/// Reed-Solomon decoder for messages of degree at most `k`.
#[derive(Clone, Debug)]
pub struct ReedSolomonDecoder<F, O = NoopObserver> {
    field: F,
    k: usize,
    observer: O,
}

impl<F: GaloisField> ReedSolomonDecoder<F> {
    pub fn new(field: F, k: usize) -> Self {
        Self {
            field,
            k,
            observer: NoopObserver,
        }
    }
}

impl<F: GaloisField, O: DecodeObserver> ReedSolomonDecoder<F, O> {
    /// Replaces the observer that receives decode events.
    pub fn with_observer<P: DecodeObserver>(self, observer: P) -> ReedSolomonDecoder<F, P> {
        ReedSolomonDecoder {
            field: self.field,
            k: self.k,
            observer,
        }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// The message degree bound.
    pub fn degree_bound(&self) -> usize {
        self.k
    }

    /// Maximum number of symbol errors correctable among `n` non-erased samples.
    pub fn correctable_errors(&self, n: usize) -> usize {
        n.saturating_sub(self.k).saturating_sub(1) / 2
    }

    /// Decodes a received word.
    ///
    /// # Errors
    ///
    /// - `DecodeError::InvalidInput` if `k` is not below the number of non-erased samples.
    /// - `DecodeError::DivisionByZero` if a field inverse of zero is requested.
    /// - `DecodeError::UncorrectableError` if the word has more errors than can be corrected.
    pub fn decode(&self, samples: &SampleSet) -> DecodeResult<DecodeReport> {
        let erasures = samples.erasures();
        let (xs, ys) = samples.present();

        if self.k >= xs.len() {
            return Err(DecodeError::invalid_input(format!(
                "degree bound {} must be below the number of non-erased samples {}",
                self.k,
                xs.len()
            )));
        }

        let (message, errors_corrected) = self.decode_present(&xs, &ys).inspect_err(|err| {
            self.observer.on_event(&DecodeEvent::Failed {
                reason: err.to_string(),
            })
        })?;

        Ok(DecodeReport {
            message,
            errors_corrected,
            erasures,
            samples: samples.len(),
        })
    }

    fn decode_present(
        &self,
        xs: &[Element],
        ys: &[Element],
    ) -> DecodeResult<(Polynomial, usize)> {
        let field = &self.field;
        let n = xs.len();
        let k = self.k;

        let mut g1 = interpolate_polynomial(field, xs, ys)?;
        self.observer.on_event(&DecodeEvent::Interpolated {
            samples: n,
            degree: g1.degree(),
        });

        if g1.degree().map_or(true, |d| d <= k) {
            self.observer.on_event(&DecodeEvent::NoErrors);
            g1.normalize();
            return Ok((g1, 0));
        }

        let g0 = annihilator(field, xs)?;
        self.observer
            .on_event(&DecodeEvent::AnnihilatorBuilt { degree: n });

        let bezout = extended_euclid(field, g0, g1, (n + k) / 2 + 1)?;
        self.observer.on_event(&DecodeEvent::SolverFinished {
            iterations: bezout.iterations,
            gcd_degree: bezout.gcd.degree(),
            locator_degree: bezout.v.degree(),
        });

        if bezout.v.is_zero() {
            return Err(DecodeError::uncorrectable("no error locator found"));
        }

        let (mut message, remainder) = bezout.gcd.div_rem(&bezout.v, field)?;
        if !remainder.is_zero() {
            return Err(DecodeError::uncorrectable(
                "error locator does not divide the key-equation remainder",
            ));
        }
        if let Some(degree) = message.degree().filter(|d| *d > k) {
            return Err(DecodeError::uncorrectable(format!(
                "recovered message has degree {degree}, above the bound {k}"
            )));
        }

        let errors = xs
            .iter()
            .zip(ys)
            .filter(|(x, y)| message.evaluate(**x, field) != **y)
            .count();
        let capacity = self.correctable_errors(n);
        if errors > capacity {
            return Err(DecodeError::uncorrectable(format!(
                "{errors} symbol errors exceed the correction capacity {capacity}"
            )));
        }

        message.normalize();
        self.observer.on_event(&DecodeEvent::Corrected { errors });
        Ok((message, errors))
    }
}

/// Builds `Π (x - x_i)` over the evaluation points in a single preallocated buffer.
pub fn annihilator<F: GaloisField>(field: &F, xs: &[Element]) -> DecodeResult<Polynomial> {
    let mut poly = Polynomial::with_headroom(xs.len());
    for &x in xs {
        poly.multiply_by_linear(field.neg(x), 1, field)?;
    }
    Ok(poly)
}
