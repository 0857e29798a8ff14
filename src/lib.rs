//! # rlox - A Lexer for the Lox Scripting Language
//!
//! A lexical analyzer (scanner) for **Lox**, a small dynamically-typed
//! scripting language. The scanner converts raw source text into a finite,
//! ordered sequence of typed tokens in a single forward pass, reporting
//! malformed input through a caller-supplied diagnostic sink without ever
//! aborting the scan.
//!
//! ## Quick Start
//!
//! ```rust
//! use rlox::{Scanner, TokenKind};
//!
//! let mut errors = Vec::new();
//! let scanner = Scanner::new("print 1 + 2;", |e| errors.push(e));
//! let tokens = scanner.scan_tokens();
//!
//! assert!(errors.is_empty());
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Print,
//!         TokenKind::Number,
//!         TokenKind::Plus,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! ## Error Reporting
//!
//! Malformed input never stops the scan. Each malformed span is reported to
//! the sink as a [`ScanError`] and skipped, and scanning resumes with the
//! next character:
//!
//! ```rust
//! use rlox::{ScanError, Scanner, TokenKind};
//!
//! let mut errors = Vec::new();
//! let tokens = Scanner::new("1 @ 2", |e| errors.push(e)).scan_tokens();
//!
//! assert_eq!(errors, vec![ScanError::UnexpectedCharacter { ch: '@', line: 1 }]);
//! assert_eq!(tokens.len(), 3); // both numbers survive, plus EOF_LOX
//! ```
//!
//! Whether any diagnostic occurred (and what that means for the process exit
//! code) is the caller's bookkeeping; the scanner keeps no error state.
//!
//! ## Token Lifetimes
//!
//! [`Token`] lexemes are borrowed slices of the original source buffer, so
//! the borrow checker guarantees tokens never outlive the text they were
//! scanned from. String literals borrow the text between the quotes the same
//! way; number literals decode to `f64`.
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens
//! ```
//!
//! Lexing is the only stage this crate implements. Parsing, semantic
//! analysis, and evaluation are future stages built on the token stream.
//!
//! ## Main Components
//!
//! - [`Scanner`] - Tokenizes source code into tokens
//! - [`Token`] - A classified lexeme plus literal value and source line
//! - [`TokenKind`] - The closed set of lexical categories
//! - [`Literal`] - Number or string payload of a literal token
//! - [`ScanError`] - The two recoverable lexical diagnostics

/// Version of the rlox crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::ScanError;
pub use lexer::{Literal, Scanner, Token, TokenKind};
