// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # GF(2^n) Polynomial Library
//!
//! Polynomial arithmetic over binary extension fields, Lagrange interpolation and
//! Reed-Solomon decoding.
//!
//! ## Features
//!
//! - Polynomial kernel: addition, subtraction, scaling, in-place multiplication by a linear
//!   factor, convolution and long division with remainder.
//! - Interpolation: minimal-degree polynomial through a set of samples, for threshold-style
//!   secret reconstruction.
//! - Key-equation solver: extended Euclidean algorithm with an early stopping degree.
//! - Reed-Solomon decoding: error and erasure correction up to the code's capacity, with an
//!   observer hook for progress events.
//! - Serialization: Optional serde support for polynomial serialization with bincode integration.
//!
//! ## Example
//!
//! ```
//! use gf2_polynomial::{decode_reed_solomon, interpolate};
//!
//! // GF(8) with modulus x^3 + x + 1. The message 1 + 2x sampled at x = 1..=4.
//! let points = [(1, 3), (2, 5), (3, 7), (4, 2)];
//! assert_eq!(interpolate(&points, 0b1011).unwrap(), vec![1, 2, 0, 0]);
//!
//! // One corrupted symbol is corrected.
//! let received = [(1, 3), (2, 3), (3, 7), (4, 2)];
//! assert_eq!(decode_reed_solomon(&received, 1, 0b1011).unwrap(), vec![1, 2, 0, 0]);
//! ```

pub mod api;
pub mod errors;
pub mod euclid;
pub mod interpolate;
pub mod observer;
pub mod polynomial;
pub mod reed_solomon;
pub mod samples;

pub use api::{decode_reed_solomon, decode_reed_solomon_with_erasures, interpolate};
pub use errors::{DecodeError, DecodeResult, PolynomialError};
pub use euclid::{extended_euclid, Bezout};
pub use gf2_field::{Element, FieldError, GaloisField, Gf2Field};
pub use interpolate::interpolate_polynomial;
pub use observer::{DecodeEvent, DecodeObserver, NoopObserver, TracingObserver};
pub use polynomial::Polynomial;
pub use reed_solomon::{annihilator, DecodeReport, ReedSolomonDecoder};
pub use samples::SampleSet;
