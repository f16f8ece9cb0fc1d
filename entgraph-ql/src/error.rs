//! Error types for predicate construction and consumption.
//!
//! Building, binding, rendering and negating predicates never fails: kind
//! mismatches are rejected by the compiler. The few fallible entry points are
//! the ones that take runtime-sized input or cross into a collaborator:
//!
//! - n-ary combinators over an iterator ([`and_all`](crate::expr::and_all),
//!   [`or_all`](crate::expr::or_all))
//! - parsing a call name back into a [`Func`](crate::op::Func)
//! - asking an opaque driver valuer for its bound value
//!
//! # Error Codes
//!
//! Error codes follow a pattern: E{category}{number}
//! - 1xxx: Construction errors (empty operand lists)
//! - 2xxx: Consumer errors (unknown call names)
//! - 3xxx: Value errors (driver valuers)
//!
//! ```rust
//! use entgraph_ql::{ErrorCode, QlError};
//!
//! let err = QlError::unknown_func("regex_match");
//! assert_eq!(err.code, ErrorCode::UnknownFunc);
//! assert!(err.to_string().contains("regex_match"));
//! ```

use std::fmt;
use thiserror::Error;

/// Result type for predicate operations.
pub type QlResult<T> = Result<T, QlError>;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Construction errors (1xxx)
    /// An n-ary combinator received no operands (E1001).
    EmptyOperands = 1001,

    // Consumer errors (2xxx)
    /// A call name is not one of the known functions (E2001).
    UnknownFunc = 2001,

    // Value errors (3xxx)
    /// A driver valuer failed to produce its value (E3001).
    ValuerFailed = 3001,
}

impl ErrorCode {
    /// Get the error code string (e.g., "E1001").
    pub fn code(&self) -> String {
        format!("E{}", *self as u16)
    }

    /// Get a short description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::EmptyOperands => "Combinator without operands",
            Self::UnknownFunc => "Unknown call function",
            Self::ValuerFailed => "Driver valuer failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by the fallible predicate entry points.
#[derive(Error, Debug)]
pub struct QlError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// Suggestions for fixing the error.
    pub suggestions: Vec<String>,
    /// The source error (if any).
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for QlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl QlError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// An `and`/`or` over an empty operand list.
    pub fn empty_operands(op: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::EmptyOperands,
            format!("`{}` requires at least one operand", op),
        )
        .with_suggestion("Use the binary form or the and!/or! macros for fixed operand lists")
    }

    /// A call name outside the known function set.
    pub fn unknown_func(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(ErrorCode::UnknownFunc, format!("unknown function `{}`", name)).with_suggestion(
            "Known functions: contains, contains_fold, equal_fold, has_prefix, has_suffix, has_edge",
        )
    }

    /// A driver valuer could not produce a value.
    pub fn valuer(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValuerFailed, message)
    }

    /// Get the error code.
    pub fn error_code(&self) -> &ErrorCode {
        &self.code
    }

    /// Format the error with its suggestions, one per line.
    pub fn display_full(&self) -> String {
        let mut output = format!("Error [{}]: {}", self.code.code(), self.message);
        if !self.suggestions.is_empty() {
            output.push_str("\n\nSuggestions:");
            for (i, s) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("\n  {}. {}", i + 1, s));
            }
        }
        if let Some(source) = &self.source {
            output.push_str(&format!("\n\nCaused by: {}", source));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_format() {
        assert_eq!(ErrorCode::EmptyOperands.code(), "E1001");
        assert_eq!(ErrorCode::UnknownFunc.code(), "E2001");
        assert_eq!(ErrorCode::ValuerFailed.code(), "E3001");
    }

    #[test]
    fn test_empty_operands_error() {
        let err = QlError::empty_operands("&&");
        assert_eq!(err.code, ErrorCode::EmptyOperands);
        assert!(err.message.contains("&&"));
        assert!(!err.suggestions.is_empty());
    }

    #[test]
    fn test_display_prefixes_code() {
        let err = QlError::unknown_func("like");
        assert_eq!(err.to_string(), "[E2001] unknown function `like`");
    }

    #[test]
    fn test_display_full() {
        let err = QlError::valuer("connection closed")
            .with_suggestion("Check the valuer implementation");
        let output = err.display_full();
        assert!(output.contains("E3001"));
        assert!(output.contains("Suggestions"));
        assert!(output.contains("Check the valuer implementation"));
    }

    #[test]
    fn test_source_is_preserved() {
        let io = std::io::Error::other("boom");
        let err = QlError::valuer("valuer failed").with_source(io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.display_full().contains("Caused by: boom"));
    }
}
