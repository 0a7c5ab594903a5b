//! Error types for Stride
//!
//! Every error carries a stable code, a human message, and optionally a
//! suggestion and structured context, so hosts can both display and
//! programmatically handle failures.

use crate::number::NumberError;
use serde::{Deserialize, Serialize};

/// Stable error codes for programmatic handling
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const EMPTY_SEQUENCE: &str = "EMPTY_SEQUENCE";
    pub const LIMIT_EXCEEDED: &str = "LIMIT_EXCEEDED";
    pub const INTERNAL: &str = "INTERNAL";
}

/// How bad is it?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Request refused by policy, inputs are otherwise well formed
    Warning,
    /// Request failed validation or computation
    Error,
    /// Engine bug, not a caller mistake
    Fatal,
}

/// Structured context attached to an error
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Name of the offending parameter, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,

    /// The rejected value, rendered as a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Free-form notes (e.g. which list element failed)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Rich error type used across the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrideError {
    /// One of the constants in [`codes`]
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// What the caller can do about it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    pub severity: Severity,
}

impl StrideError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: add context
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Builder: name the offending parameter
    pub fn for_parameter(mut self, parameter: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.parameter = Some(parameter.into());
        self
    }

    /// Builder: record the rejected value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.value = Some(value.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Enter a decimal number such as 2.5, or a fraction such as 1/2")
    }

    pub fn div_zero() -> Self {
        Self::new(codes::DIV_ZERO, "Division by zero")
            .with_suggestion("Ensure divisor is not zero")
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(codes::INVALID_INPUT, message)
    }

    pub fn empty_sequence() -> Self {
        Self::new(codes::EMPTY_SEQUENCE, "Cannot summarize an empty sequence")
            .with_suggestion("Provide at least one term")
    }

    /// Refusal for oversized requests. A warning rather than an error:
    /// the inputs are well formed, the host just declines to serve them.
    pub fn limit_exceeded(max_terms: usize) -> Self {
        Self::new(
            codes::LIMIT_EXCEEDED,
            format!(
                "For performance reasons, please limit the number of terms to {} or less",
                max_terms
            ),
        )
        .with_severity(Severity::Warning)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for StrideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for StrideError {}

impl From<NumberError> for StrideError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::parse_error(s),
            NumberError::DivisionByZero => Self::div_zero(),
        }
    }
}
