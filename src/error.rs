//! Error types for the Lox scanner

use thiserror::Error;

/// Lexical errors reported through the scanner's diagnostic sink
///
/// These are diagnostics, not failures: the scanner recovers locally from
/// both kinds and always finishes the scan. Deciding what a diagnostic means
/// for the session (error count, process exit code) is the caller's job.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ScanError {
    /// An input character did not begin any recognized lexeme
    ///
    /// **Triggered by:** bytes outside the lexical grammar
    /// **Example:** `@`, `#`, `$`
    #[error("Unexpected character '{ch}'.")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Line number where the character was found
        line: usize,
    },

    /// A string literal's opening quote had no matching closing quote
    ///
    /// **Triggered by:** end of input inside a string literal
    /// **Example:** `"abc`
    #[error("Unterminated string.")]
    UnterminatedString {
        /// Line number reached when input ran out
        line: usize,
    },
}

impl ScanError {
    /// Line where the problem was detected (1-indexed)
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. } => *line,
            ScanError::UnterminatedString { line } => *line,
        }
    }
}
