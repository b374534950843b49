// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Validated sample sets of evaluation points and received symbols.

use crate::errors::{DecodeError, DecodeResult};
use gf2_field::{Element, GaloisField};
use std::collections::HashMap;

/// Evaluation points `xs` and received symbols `ys`, where `None` marks an erased symbol.
///
/// Construction checks that the set is non-empty, every x-coordinate is distinct and every
/// value is an element of the field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleSet {
    xs: Vec<Element>,
    ys: Vec<Option<Element>>,
}

impl SampleSet {
    pub fn new<F: GaloisField>(
        field: &F,
        xs: Vec<Element>,
        ys: Vec<Option<Element>>,
    ) -> DecodeResult<Self> {
        if xs.is_empty() {
            return Err(DecodeError::invalid_input("sample set is empty"));
        }
        if xs.len() != ys.len() {
            return Err(DecodeError::invalid_input(format!(
                "sample set has {} x-coordinates but {} y-values",
                xs.len(),
                ys.len()
            )));
        }

        let mut seen = HashMap::with_capacity(xs.len());
        for (i, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
            if !field.contains(x) {
                return Err(DecodeError::invalid_input(format!(
                    "x-coordinate {x:#x} at index {i} is not a field element"
                )));
            }
            if let Some(y) = y.filter(|y| !field.contains(*y)) {
                return Err(DecodeError::invalid_input(format!(
                    "y-value {y:#x} at index {i} is not a field element"
                )));
            }
            if let Some(first) = seen.insert(x, i) {
                return Err(DecodeError::invalid_input(format!(
                    "duplicate x-coordinate {x:#x} at indices {first} and {i}"
                )));
            }
        }

        Ok(Self { xs, ys })
    }

    /// Builds a sample set from `(x, y)` pairs with no erasures.
    pub fn from_points<F: GaloisField>(
        field: &F,
        points: &[(Element, Element)],
    ) -> DecodeResult<Self> {
        let (xs, ys) = points.iter().map(|&(x, y)| (x, Some(y))).unzip();
        Self::new(field, xs, ys)
    }

    /// Builds a sample set from `(x, y)` pairs where `y` may be erased.
    pub fn from_partial_points<F: GaloisField>(
        field: &F,
        points: &[(Element, Option<Element>)],
    ) -> DecodeResult<Self> {
        let (xs, ys) = points.iter().copied().unzip();
        Self::new(field, xs, ys)
    }

    /// Total number of samples, erased ones included.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[Element] {
        &self.xs
    }

    pub fn ys(&self) -> &[Option<Element>] {
        &self.ys
    }

    /// Number of erased symbols.
    pub fn erasures(&self) -> usize {
        self.ys.iter().filter(|y| y.is_none()).count()
    }

    /// Returns the coordinates of the samples that were not erased, in order.
    pub fn present(&self) -> (Vec<Element>, Vec<Element>) {
        self.xs
            .iter()
            .zip(&self.ys)
            .filter_map(|(&x, &y)| y.map(|y| (x, y)))
            .unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf2_field::Gf2Field;

    fn gf8() -> Gf2Field {
        Gf2Field::new(0b1011).unwrap()
    }

    #[test]
    fn test_from_points() {
        let samples = SampleSet::from_points(&gf8(), &[(1, 3), (2, 5), (3, 7)]).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.xs(), &[1, 2, 3]);
        assert_eq!(samples.ys(), &[Some(3), Some(5), Some(7)]);
        assert_eq!(samples.erasures(), 0);
    }

    #[test]
    fn test_present_skips_erasures() {
        let samples =
            SampleSet::from_partial_points(&gf8(), &[(1, Some(3)), (2, None), (3, Some(7))])
                .unwrap();
        assert_eq!(samples.erasures(), 1);
        assert_eq!(samples.present(), (vec![1, 3], vec![3, 7]));
    }

    #[test]
    fn test_duplicate_x_reports_both_indices() {
        let err = SampleSet::from_points(&gf8(), &[(1, 3), (2, 5), (2, 7)]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::invalid_input("duplicate x-coordinate 0x2 at indices 1 and 2")
        );
    }

    #[test]
    fn test_rejects_empty_and_out_of_range() {
        let field = gf8();
        assert!(matches!(
            SampleSet::from_points(&field, &[]),
            Err(DecodeError::InvalidInput { .. })
        ));
        assert!(matches!(
            SampleSet::from_points(&field, &[(8, 1)]),
            Err(DecodeError::InvalidInput { .. })
        ));
        assert!(matches!(
            SampleSet::from_points(&field, &[(1, 9)]),
            Err(DecodeError::InvalidInput { .. })
        ));
        assert!(matches!(
            SampleSet::new(&field, vec![1, 2], vec![Some(1)]),
            Err(DecodeError::InvalidInput { .. })
        ));
    }
}
