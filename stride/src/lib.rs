//! Stride - Arithmetic Sequence Engine

mod render;
mod sequence;
mod series;

pub use render::{formula, guide, DisplayLimits, Renderer, SequenceReport};
pub use sequence::{
    nth_term, require_terms, ParamMeta, Sequence, SequenceRequest, MAX_TERMS, PARAMS,
};
pub use series::SequenceStatistics;

use stride_core::{Number, StrideError};

/// Generate an arithmetic sequence
pub fn generate(
    first_term: &Number,
    common_difference: &Number,
    num_terms: usize,
) -> Result<Sequence, StrideError> {
    let request = SequenceRequest::new(first_term.clone(), common_difference.clone(), num_terms)?;
    Ok(Sequence::generate(&request))
}

/// Summarize a sequence
pub fn statistics(sequence: &Sequence) -> Result<SequenceStatistics, StrideError> {
    SequenceStatistics::of(sequence)
}

/// Generate, summarize, and render in one call
pub fn report(
    first_term: &Number,
    common_difference: &Number,
    num_terms: usize,
) -> Result<SequenceReport, StrideError> {
    let request = SequenceRequest::new(first_term.clone(), common_difference.clone(), num_terms)?;
    let sequence = Sequence::generate(&request);
    let statistics = SequenceStatistics::of(&sequence)?;
    let markdown = Renderer::new().render(&request, &sequence, &statistics);
    Ok(SequenceReport {
        markdown,
        sequence,
        statistics,
    })
}
