//! Arithmetic sequence generation
//!
//! A sequence is produced by repeated addition of the common difference,
//! starting from the first term. Terms are arbitrary precision Numbers,
//! so long runs accumulate no rounding error.

use serde::Serialize;
use stride_core::{Number, StrideError};

/// Largest request size a well-behaved host should accept.
///
/// The engine itself generates any positive count; this bound exists so
/// hosts that expose the engine to end users share one refusal point.
pub const MAX_TERMS: usize = 1000;

/// Metadata for one input parameter: name, label, and form default
#[derive(Debug, Clone, Serialize)]
pub struct ParamMeta {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub typ: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<usize>,
    pub default: &'static str,
}

/// The three inputs every request is built from
pub static PARAMS: [ParamMeta; 3] = [
    ParamMeta {
        name: "first_term",
        label: "First Term (a₁)",
        typ: "number",
        description: "The first term of the arithmetic sequence",
        minimum: None,
        maximum: None,
        default: "1.0",
    },
    ParamMeta {
        name: "common_difference",
        label: "Common Difference (d)",
        typ: "number",
        description: "The constant difference between consecutive terms",
        minimum: None,
        maximum: None,
        default: "1.0",
    },
    ParamMeta {
        name: "num_terms",
        label: "Number of Terms (n)",
        typ: "integer",
        description: "How many terms to generate (must be positive)",
        minimum: Some(1),
        maximum: Some(MAX_TERMS),
        default: "10",
    },
];

/// A validated generation request
#[derive(Debug, Clone)]
pub struct SequenceRequest {
    first_term: Number,
    common_difference: Number,
    num_terms: usize,
}

impl SequenceRequest {
    /// Build a request; the term count must be at least 1
    pub fn new(
        first_term: Number,
        common_difference: Number,
        num_terms: usize,
    ) -> Result<Self, StrideError> {
        if num_terms < 1 {
            return Err(
                StrideError::invalid_input("Number of terms must be a positive integer")
                    .for_parameter("num_terms")
                    .with_value(num_terms.to_string()),
            );
        }
        Ok(Self {
            first_term,
            common_difference,
            num_terms,
        })
    }

    pub fn first_term(&self) -> &Number {
        &self.first_term
    }

    pub fn common_difference(&self) -> &Number {
        &self.common_difference
    }

    pub fn num_terms(&self) -> usize {
        self.num_terms
    }
}

/// A generated arithmetic sequence
#[derive(Debug, Clone)]
pub struct Sequence {
    terms: Vec<Number>,
}

impl Sequence {
    /// Generate by repeated addition of the common difference
    pub fn generate(request: &SequenceRequest) -> Self {
        let mut terms = Vec::with_capacity(request.num_terms);
        let mut current = request.first_term.clone();
        for _ in 0..request.num_terms {
            terms.push(current.clone());
            current = current.add(&request.common_difference);
        }
        Self { terms }
    }

    /// Wrap an existing list of terms (e.g. supplied by a host)
    pub fn from_terms(terms: Vec<Number>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[Number] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn first(&self) -> Option<&Number> {
        self.terms.first()
    }

    pub fn last(&self) -> Option<&Number> {
        self.terms.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Number> {
        self.terms.iter()
    }
}

/// Validate a term count supplied as a general Number.
///
/// Rejects non-integers, zero, and negatives. Does NOT apply
/// [`MAX_TERMS`]; that cap belongs to the host.
pub fn require_terms(n: &Number) -> Result<usize, StrideError> {
    if !n.is_integer() || n.is_negative() || n.is_zero() {
        return Err(
            StrideError::invalid_input("Number of terms must be a positive integer")
                .for_parameter("num_terms")
                .with_value(n.as_compact()),
        );
    }
    match n.to_i64() {
        Some(count) => Ok(count as usize),
        None => Err(StrideError::invalid_input("Number of terms is too large")
            .for_parameter("num_terms")
            .with_value(n.as_compact())),
    }
}

/// Closed-form term lookup, 1-based: a(n) = first + diff * (n - 1)
pub fn nth_term(first: &Number, diff: &Number, n: usize) -> Result<Number, StrideError> {
    if n < 1 {
        return Err(
            StrideError::invalid_input("Term position must be a positive integer")
                .for_parameter("n")
                .with_value(n.to_string()),
        );
    }
    let offset = Number::from_i64((n - 1) as i64);
    Ok(first.add(&diff.mul(&offset)))
}
