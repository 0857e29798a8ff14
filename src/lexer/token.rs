use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// A single token from the source code
///
/// The lexeme borrows from the source buffer, so a token never outlives the
/// text it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Token<'src> {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    #[serde(borrow)]
    pub lexeme: &'src str,
    /// Literal value, present only for number and string tokens
    #[serde(borrow)]
    pub literal: Option<Literal<'src>>,
    /// Line number where the token appears (1-indexed)
    pub line: usize,
}

impl<'src> Token<'src> {
    /// Creates a new token with the given properties
    pub fn new(
        kind: TokenKind,
        lexeme: &'src str,
        literal: Option<Literal<'src>>,
        line: usize,
    ) -> Self {
        Token {
            kind,
            lexeme,
            literal,
            line,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} ", self.kind, self.lexeme),
        }
    }
}

/// Literal value carried by a token
///
/// Only two token kinds carry a payload: numbers decode to an `f64`, strings
/// to the text strictly between the quotes. Every other kind has no literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Literal<'src> {
    /// Numeric literal
    Number(f64),
    /// String literal, quotes stripped
    String(#[serde(borrow)] &'src str),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "{}", s),
        }
    }
}

/// All possible token types in Lox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Single-character tokens
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,
    /// Comma delimiter
    Comma,
    /// Dot operator
    Dot,
    /// Minus operator (-)
    Minus,
    /// Plus operator (+)
    Plus,
    /// Semicolon delimiter
    Semicolon,
    /// Slash operator (/)
    Slash,
    /// Star operator (*)
    Star,

    // One or two character tokens
    /// Logical NOT operator (!)
    Bang,
    /// Inequality operator (!=)
    BangEqual,
    /// Assignment operator (=)
    Equal,
    /// Equality operator (==)
    EqualEqual,
    /// Greater than operator (>)
    Greater,
    /// Greater than or equal operator (>=)
    GreaterEqual,
    /// Less than operator (<)
    Less,
    /// Less than or equal operator (<=)
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// String literal
    String,
    /// Number literal
    Number,

    // Keywords
    /// and keyword
    And,
    /// class keyword
    Class,
    /// else keyword
    Else,
    /// false keyword
    False,
    /// fun keyword
    Fun,
    /// for keyword
    For,
    /// if keyword
    If,
    /// nil keyword
    Nil,
    /// or keyword
    Or,
    /// print keyword
    Print,
    /// return keyword
    Return,
    /// super keyword
    Super,
    /// this keyword
    This,
    /// true keyword
    True,
    /// var keyword
    Var,
    /// while keyword
    While,

    /// End of input marker
    Eof,
}

lazy_static! {
    /// Reserved words, built once and shared read-only across all scanners
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("class", TokenKind::Class);
        map.insert("else", TokenKind::Else);
        map.insert("false", TokenKind::False);
        map.insert("for", TokenKind::For);
        map.insert("fun", TokenKind::Fun);
        map.insert("if", TokenKind::If);
        map.insert("nil", TokenKind::Nil);
        map.insert("or", TokenKind::Or);
        map.insert("print", TokenKind::Print);
        map.insert("return", TokenKind::Return);
        map.insert("super", TokenKind::Super);
        map.insert("this", TokenKind::This);
        map.insert("true", TokenKind::True);
        map.insert("var", TokenKind::Var);
        map.insert("while", TokenKind::While);
        map
    };
}

impl TokenKind {
    /// Get the keyword kind for an identifier text, if it is reserved
    ///
    /// Exact-match and case-sensitive: `for` is a keyword, `For` and `form`
    /// are plain identifiers.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS.get(text).copied()
    }

    /// Check if token kind is a reserved keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// Diagnostic name of the kind, matching the legacy token dump format
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF_LOX",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("for"), Some(TokenKind::For));
        assert_eq!(TokenKind::keyword("while"), Some(TokenKind::While));
        assert_eq!(TokenKind::keyword("nil"), Some(TokenKind::Nil));

        // Prefixes and case variants are not keywords
        assert_eq!(TokenKind::keyword("form"), None);
        assert_eq!(TokenKind::keyword("For"), None);
        assert_eq!(TokenKind::keyword(""), None);
    }

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::Class.is_keyword());
        assert!(TokenKind::Super.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn test_legacy_names() {
        assert_eq!(TokenKind::LeftParen.name(), "LEFT_PAREN");
        assert_eq!(TokenKind::BangEqual.name(), "BANG_EQUAL");
        assert_eq!(TokenKind::GreaterEqual.name(), "GREATER_EQUAL");
        assert_eq!(TokenKind::Eof.name(), "EOF_LOX");
        assert_eq!(format!("{}", TokenKind::Number), "NUMBER");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Number, "3.14", Some(Literal::Number(3.14)), 1);
        assert_eq!(token.to_string(), "NUMBER 3.14 3.14");

        let token = Token::new(TokenKind::Semicolon, ";", None, 2);
        assert_eq!(token.to_string(), "SEMICOLON ; ");

        let token = Token::new(TokenKind::String, "\"hi\"", Some(Literal::String("hi")), 3);
        assert_eq!(token.to_string(), "STRING \"hi\" hi");
    }
}
