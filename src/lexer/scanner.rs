use tracing::debug;

use super::token::{Literal, Token, TokenKind};
use crate::error::ScanError;

/// Scanner for Lox source text
///
/// Walks the source in a single forward pass with one character of lookahead
/// (two for the fractional part of numbers) and accumulates tokens. Malformed
/// spans are handed to the diagnostic sink and skipped; the scan itself never
/// fails. One scanner performs exactly one scan.
pub struct Scanner<'src, F: FnMut(ScanError)> {
    /// Source text being scanned
    source: &'src str,
    /// Accumulated tokens
    tokens: Vec<Token<'src>>,
    /// Diagnostic sink, invoked once per malformed span
    error_handler: F,
    /// Byte offset where the current lexeme begins
    start: usize,
    /// Byte offset of the next unread character
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
}

impl<'src, F: FnMut(ScanError)> Scanner<'src, F> {
    /// Creates a new scanner over a source buffer
    ///
    /// The error handler may be called any number of times during the scan,
    /// once per diagnostic; the scanner never stores it beyond the scan.
    pub fn new(source: &'src str, error_handler: F) -> Self {
        Scanner {
            source,
            tokens: Vec::new(),
            error_handler,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the entire source and returns the tokens in source order
    ///
    /// The result always ends with exactly one end-of-input token whose
    /// lexeme is empty and whose line is the final line count. Empty input
    /// yields just that token.
    pub fn scan_tokens(mut self) -> Vec<Token<'src>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::new(TokenKind::Eof, "", None, self.line));

        debug!(tokens = self.tokens.len(), lines = self.line, "scan complete");

        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            // Two-character forms win whenever the next character is '='
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // Whitespace produces no token
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.scan_string(),

            c if c.is_ascii_digit() => self.scan_number(),

            c if is_identifier_start(c) => self.scan_identifier(),

            _ => (self.error_handler)(ScanError::UnexpectedCharacter {
                ch: c,
                line: self.line,
            }),
        }
    }

    /// Discards everything up to, but not including, the next newline
    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn scan_string(&mut self) {
        while !self.is_at_end() && self.peek() != '"' {
            // Strings may span lines
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            (self.error_handler)(ScanError::UnterminatedString { line: self.line });
            return;
        }

        // Consume the closing quote
        self.advance();

        // The literal is the text strictly between the quotes
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenKind::String, Literal::String(value));
    }

    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A fractional part only counts when the dot is followed by a digit;
        // a trailing dot is left for the next scan step
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme = &self.source[self.start..self.current];
        // A maximal digit run with optional fraction always parses
        let value = lexeme.parse::<f64>().unwrap();
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }

    fn scan_identifier(&mut self) {
        while is_identifier_part(self.peek()) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current..].chars().next().unwrap();
        self.current += c.len_utf8();
        c
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.peek() != expected {
            return false;
        }

        self.advance();
        true
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = &self.source[self.start..self.current];
        self.tokens.push(Token::new(kind, lexeme, None, self.line));
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal<'src>) {
        let lexeme = &self.source[self.start..self.current];
        self.tokens
            .push(Token::new(kind, lexeme, Some(literal), self.line));
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
