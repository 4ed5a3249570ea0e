//! Error types for parsing and compiling date filters.

use std::fmt;

use thiserror::Error;

use super::ast::OperatorTag;

/// A specialized Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Compilation entry point an operator was presented to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileMode {
    /// Single-operator filters without a period.
    Unbounded,
    /// `lt`/`gt` filters bounded by a caller-supplied period.
    Period,
}

impl fmt::Display for CompileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileMode::Unbounded => f.write_str("unbounded"),
            CompileMode::Period => f.write_str("period-bounded"),
        }
    }
}

/// Errors that can occur while parsing or compiling a filter parameter.
///
/// Each variant names the stage that rejected the input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The filter parameter is empty or blank.
    #[error("filter parameter is empty")]
    EmptyExpression,

    /// The parameter does not match `<prefix><YYYY-MM-DD>[T<HH:MM>]`.
    #[error("invalid parameter format: {input}")]
    GrammarMismatch {
        /// The rejected input.
        input: String,
    },

    /// The parameter matched the grammar but is not a real date or time.
    #[error("invalid date format: {input}: {source}")]
    InvalidDate {
        /// The reassembled date/time text.
        input: String,
        /// The underlying chrono parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// The operator is not handled by the entry point it was given to.
    #[error("unsupported operator '{operator}' for {mode} filters")]
    UnsupportedOperator {
        /// The rejected operator.
        operator: OperatorTag,
        /// The entry point that rejected it.
        mode: CompileMode,
    },
}

impl FilterError {
    /// Creates a grammar mismatch error.
    pub fn grammar_mismatch(input: impl Into<String>) -> Self {
        FilterError::GrammarMismatch {
            input: input.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>, source: chrono::ParseError) -> Self {
        FilterError::InvalidDate {
            input: input.into(),
            source,
        }
    }

    /// Creates an unsupported operator error.
    pub fn unsupported_operator(operator: OperatorTag, mode: CompileMode) -> Self {
        FilterError::UnsupportedOperator { operator, mode }
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            FilterError::EmptyExpression => "EMPTY_EXPRESSION",
            FilterError::GrammarMismatch { .. } => "GRAMMAR_MISMATCH",
            FilterError::InvalidDate { .. } => "INVALID_DATE",
            FilterError::UnsupportedOperator { .. } => "UNSUPPORTED_OPERATOR",
        }
    }
}
