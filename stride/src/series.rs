//! Series summation
//!
//! Computes both the direct fold over the terms and the closed-form
//! Gauss sum S = n/2 * (first + last). Over exact Numbers the two agree
//! whenever the terms are evenly spaced.

use crate::sequence::Sequence;
use stride_core::{Number, StrideError};

/// Summary statistics over a sequence
#[derive(Debug, Clone)]
pub struct SequenceStatistics {
    pub first: Number,
    pub last: Number,
    /// Sum by folding over every term
    pub sum_direct: Number,
    /// Sum by the closed formula, assuming arithmetic spacing
    pub sum_formula: Number,
}

impl SequenceStatistics {
    /// Compute statistics; fails on an empty sequence
    pub fn of(sequence: &Sequence) -> Result<Self, StrideError> {
        let (first, last) = match (sequence.first(), sequence.last()) {
            (Some(first), Some(last)) => (first.clone(), last.clone()),
            _ => return Err(StrideError::empty_sequence()),
        };

        let sum_direct = sum(sequence.iter());

        let n = Number::from_i64(sequence.len() as i64);
        let two = Number::from_i64(2);
        let sum_formula = n.mul(&first.add(&last)).checked_div(&two)?;

        Ok(Self {
            first,
            last,
            sum_direct,
            sum_formula,
        })
    }
}

/// Fold terms into their sum
pub(crate) fn sum<'a>(terms: impl Iterator<Item = &'a Number>) -> Number {
    terms.fold(Number::from_i64(0), |acc, n| acc.add(n))
}
