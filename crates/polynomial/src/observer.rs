// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Decode progress events and the observer hook that receives them.

use tracing::debug;

/// A step reached by the Reed-Solomon decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeEvent {
    /// The received symbols were interpolated.
    Interpolated { samples: usize, degree: Option<usize> },
    /// The interpolant already fits the degree bound, so the solver is skipped.
    NoErrors,
    /// The annihilator of the evaluation points was built.
    AnnihilatorBuilt { degree: usize },
    /// The key-equation solver stopped.
    SolverFinished {
        iterations: usize,
        gcd_degree: Option<usize>,
        locator_degree: Option<usize>,
    },
    /// The message was recovered after correcting `errors` symbols.
    Corrected { errors: usize },
    /// Decoding gave up.
    Failed { reason: String },
}

/// Receives [`DecodeEvent`]s from a decoder.
///
/// Observers only watch; nothing they do can change the decode outcome.
pub trait DecodeObserver {
    fn on_event(&self, _event: &DecodeEvent) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl DecodeObserver for NoopObserver {}

/// Observer that forwards events to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl DecodeObserver for TracingObserver {
    fn on_event(&self, event: &DecodeEvent) {
        match event {
            DecodeEvent::Interpolated { samples, degree } => {
                debug!(samples, ?degree, "Interpolated received symbols")
            }
            DecodeEvent::NoErrors => debug!("Interpolant within degree bound, no errors"),
            DecodeEvent::AnnihilatorBuilt { degree } => {
                debug!(degree, "Built annihilator polynomial")
            }
            DecodeEvent::SolverFinished {
                iterations,
                gcd_degree,
                locator_degree,
            } => debug!(
                iterations,
                ?gcd_degree,
                ?locator_degree,
                "Key-equation solver finished"
            ),
            DecodeEvent::Corrected { errors } => debug!(errors, "Corrected codeword"),
            DecodeEvent::Failed { reason } => debug!(reason = %reason, "Decoding failed"),
        }
    }
}

impl<O: DecodeObserver + ?Sized> DecodeObserver for &O {
    fn on_event(&self, event: &DecodeEvent) {
        (**self).on_event(event)
    }
}
