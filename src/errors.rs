use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a digit run could not become a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerFault {
    NoLeadingDigit,
    Overflow,
}

impl std::fmt::Display for IntegerFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegerFault::NoLeadingDigit => write!(f, "no leading digit"),
            IntegerFault::Overflow => write!(f, "value does not fit a 64-bit integer"),
        }
    }
}

/// A problem found while parsing. Diagnostics are collected, not thrown:
/// the parser keeps going and hands them back alongside the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("Invalid character {} found at position {position}", describe(.found))]
    InvalidCharacter {
        found: Option<char>,
        position: usize,
    },

    #[error("Expected closing parenthesis ')' at position {position}")]
    UnmatchedParenthesis { position: usize },

    #[error("Invalid integer at position {position}: {reason}")]
    InvalidInteger {
        position: usize,
        reason: IntegerFault,
    },

    #[error("Unexpected characters '{remaining}' after the expression at position {position}")]
    TrailingInput { position: usize, remaining: String },

    #[error("Parentheses nested deeper than {limit} at position {position}")]
    NestingTooDeep { position: usize, limit: usize },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("'{}'", ch),
        None => "end of input".to_string(),
    }
}

impl Diagnostic {
    /// Create an invalid-character diagnostic
    pub fn invalid_character(found: Option<char>, position: usize) -> Self {
        Diagnostic::InvalidCharacter { found, position }
    }

    /// Create an invalid-integer diagnostic
    pub fn invalid_integer(position: usize, reason: IntegerFault) -> Self {
        Diagnostic::InvalidInteger { position, reason }
    }

    /// Input position (in characters) the diagnostic refers to
    pub fn position(&self) -> usize {
        match self {
            Diagnostic::InvalidCharacter { position, .. }
            | Diagnostic::UnmatchedParenthesis { position }
            | Diagnostic::InvalidInteger { position, .. }
            | Diagnostic::TrailingInput { position, .. }
            | Diagnostic::NestingTooDeep { position, .. } => *position,
        }
    }
}

#[derive(Debug, Error)]
pub enum RdError {
    #[error("File read error: {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error: {0}")]
    Diagnostic(#[from] Diagnostic),

    #[error("Parse produced no tree")]
    EmptyTree,
}

// Type alias for Result with RdError
pub type RdResult<T> = Result<T, RdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_reported_for_every_variant() {
        let diagnostics = [
            Diagnostic::invalid_character(Some('+'), 3),
            Diagnostic::UnmatchedParenthesis { position: 3 },
            Diagnostic::invalid_integer(3, IntegerFault::Overflow),
            Diagnostic::TrailingInput { position: 3, remaining: ")".to_string() },
            Diagnostic::NestingTooDeep { position: 3, limit: 1 },
        ];
        for diagnostic in diagnostics {
            assert_eq!(diagnostic.position(), 3);
        }
    }

    #[test]
    fn end_of_input_is_named_in_message() {
        let message = Diagnostic::invalid_character(None, 0).to_string();
        assert_eq!(message, "Invalid character end of input found at position 0");
        let message = Diagnostic::invalid_character(Some('x'), 2).to_string();
        assert_eq!(message, "Invalid character 'x' found at position 2");
    }
}
