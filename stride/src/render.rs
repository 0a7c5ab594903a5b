//! Markdown renderer
//!
//! Renders a generated sequence and its statistics as a markdown report:
//! formula, term listing, statistics table, and background notes.

use crate::sequence::{Sequence, SequenceRequest};
use crate::series::SequenceStatistics;
use stride_core::Number;

/// Thresholds controlling how much of a sequence is shown where
#[derive(Debug, Clone, Copy)]
pub struct DisplayLimits {
    /// Render every term inline up to this length
    pub inline: usize,
    /// Terms shown in the preview for longer sequences
    pub preview: usize,
    /// Numbered term listing up to this length
    pub numbered: usize,
    /// Terms per row in the full listing
    pub row: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            inline: 20,
            preview: 10,
            numbered: 100,
            row: 10,
        }
    }
}

/// Report renderer
pub struct Renderer {
    limits: DisplayLimits,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            limits: DisplayLimits::default(),
        }
    }

    pub fn with_limits(limits: DisplayLimits) -> Self {
        Self { limits }
    }

    /// Render the full report
    pub fn render(
        &self,
        request: &SequenceRequest,
        sequence: &Sequence,
        statistics: &SequenceStatistics,
    ) -> String {
        let mut output = String::new();

        output.push_str("## Formula\n\n");
        output.push_str(&format!(
            "{}\n\n",
            formula(request.first_term(), request.common_difference())
        ));
        output.push_str(&format!(
            "Where **a₁ = {}**, **d = {}**, and **n = {}**\n\n",
            request.first_term().as_compact(),
            request.common_difference().as_compact(),
            request.num_terms()
        ));

        output.push_str("## Generated Sequence\n\n");
        if sequence.len() <= self.limits.inline {
            output.push_str(&format!("**Sequence:** {}\n\n", join_terms(sequence.terms())));
        } else {
            let preview = &sequence.terms()[..self.limits.preview];
            output.push_str(&format!(
                "**First {} terms:** {}, ...\n\n",
                self.limits.preview,
                join_terms(preview)
            ));
        }

        output.push_str("## All Terms\n\n");
        if sequence.len() <= self.limits.numbered {
            // Numbered listing, a row of positions at a time
            for (row_index, row) in sequence.terms().chunks(self.limits.row).enumerate() {
                let start = row_index * self.limits.row;
                let cells: Vec<String> = row
                    .iter()
                    .enumerate()
                    .map(|(i, term)| format!("a({}) = {}", start + i + 1, term.as_compact()))
                    .collect();
                output.push_str(&cells.join(" | "));
                output.push('\n');
            }
        } else {
            // Very long sequences get plain ranged rows
            for (row_index, row) in sequence.terms().chunks(self.limits.row).enumerate() {
                let start = row_index * self.limits.row + 1;
                let end = start + row.len() - 1;
                output.push_str(&format!("Terms {}-{}: {}\n", start, end, join_terms(row)));
            }
        }
        output.push('\n');

        output.push_str("## Sequence Statistics\n\n");
        output.push_str("| First Term | Last Term | Sum of Terms | Sum (Formula) |\n");
        output.push_str("|------------|-----------|--------------|---------------|\n");
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n\n",
            statistics.first.as_compact(),
            statistics.last.as_compact(),
            statistics.sum_direct.as_compact(),
            statistics.sum_formula.as_compact()
        ));

        output.push_str("## About Arithmetic Sequences\n\n");
        output.push_str(guide());

        output
    }
}

/// Formula line for a sequence: `a(n) = first + diff*(n-1)`
pub fn formula(first: &Number, diff: &Number) -> String {
    format!("a(n) = {} + {}*(n-1)", first.as_compact(), diff.as_compact())
}

/// Background notes appended to every report, also served as a resource
pub fn guide() -> &'static str {
    "An arithmetic sequence is a sequence of numbers where each term after the first \
is found by adding a constant (called the common difference) to the previous term.\n\
\n\
**General Formula:** aₙ = a₁ + (n-1)d\n\
\n\
- aₙ = nth term\n\
- a₁ = first term\n\
- d = common difference\n\
- n = term position\n\
\n\
**Sum Formula:** S = n/2 × (first term + last term)\n"
}

fn join_terms(terms: &[Number]) -> String {
    terms
        .iter()
        .map(|t| t.as_compact())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A rendered report together with the data it was built from
#[derive(Debug, Clone)]
pub struct SequenceReport {
    pub markdown: String,
    pub sequence: Sequence,
    pub statistics: SequenceStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    fn render(first: &str, diff: &str, count: usize) -> String {
        let request = SequenceRequest::new(num(first), num(diff), count).unwrap();
        let sequence = Sequence::generate(&request);
        let statistics = SequenceStatistics::of(&sequence).unwrap();
        Renderer::new().render(&request, &sequence, &statistics)
    }

    #[test]
    fn test_formula_line() {
        assert_eq!(formula(&num("5"), &num("3")), "a(n) = 5 + 3*(n-1)");
        assert_eq!(formula(&num("5"), &num("-2")), "a(n) = 5 + -2*(n-1)");
        assert_eq!(formula(&num("0.5"), &num("0.25")), "a(n) = 0.5 + 0.25*(n-1)");
    }

    #[test]
    fn test_where_line() {
        let report = render("5", "3", 10);
        assert!(report.contains("Where **a₁ = 5**, **d = 3**, and **n = 10**"));
    }

    #[test]
    fn test_short_sequence_inline() {
        let report = render("1", "1", 10);
        assert!(report.contains("**Sequence:** 1, 2, 3, 4, 5, 6, 7, 8, 9, 10"));
    }

    #[test]
    fn test_long_sequence_preview() {
        let report = render("1", "1", 21);
        assert!(report.contains("**First 10 terms:** 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, ..."));
        assert!(!report.contains("**Sequence:**"));
    }

    #[test]
    fn test_numbered_listing_rows() {
        let report = render("2", "2", 12);
        assert!(report.contains("a(1) = 2 | a(2) = 4"));
        assert!(report.contains("a(11) = 22 | a(12) = 24"));
    }

    #[test]
    fn test_ranged_listing_past_numbered_limit() {
        let report = render("1", "1", 101);
        assert!(report.contains("Terms 1-10: 1, 2, 3, 4, 5, 6, 7, 8, 9, 10"));
        assert!(report.contains("Terms 101-101: 101"));
        assert!(!report.contains("a(1) = 1"));
    }

    #[test]
    fn test_statistics_table() {
        let report = render("1", "1", 10);
        assert!(report.contains("| First Term | Last Term | Sum of Terms | Sum (Formula) |"));
        assert!(report.contains("| 1 | 10 | 55 | 55 |"));
    }

    #[test]
    fn test_compact_term_rendering() {
        let report = render("0", "0.5", 3);
        assert!(report.contains("**Sequence:** 0, 0.5, 1"));
    }

    #[test]
    fn test_guide_included() {
        let report = render("1", "1", 5);
        assert!(report.contains("## About Arithmetic Sequences"));
        assert!(report.contains("**General Formula:** aₙ = a₁ + (n-1)d"));
        assert!(report.contains("**Sum Formula:** S = n/2 × (first term + last term)"));
    }

    #[test]
    fn test_custom_limits() {
        let request = SequenceRequest::new(num("1"), num("1"), 6).unwrap();
        let sequence = Sequence::generate(&request);
        let statistics = SequenceStatistics::of(&sequence).unwrap();
        let renderer = Renderer::with_limits(DisplayLimits {
            inline: 5,
            preview: 3,
            numbered: 100,
            row: 10,
        });
        let report = renderer.render(&request, &sequence, &statistics);
        assert!(report.contains("**First 3 terms:** 1, 2, 3, ..."));
    }
}
