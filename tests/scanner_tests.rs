//! End-to-end tests for the Lox scanner
//!
//! Exercises the public API the way the driver does: whole programs in,
//! token sequences out, diagnostics collected by the caller.

use rlox::{Literal, ScanError, Scanner, Token, TokenKind};

fn scan(source: &str) -> (Vec<Token<'_>>, Vec<ScanError>) {
    let mut errors = Vec::new();
    let tokens = Scanner::new(source, |e| errors.push(e)).scan_tokens();
    (tokens, errors)
}

#[test]
fn test_scan_small_program() {
    let source = r#"
        var greeting = "hello";
        if (greeting != nil) {
            print greeting;
        }
    "#;

    let (tokens, errors) = scan(source);
    assert!(errors.is_empty());

    use TokenKind::*;
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            Var, Identifier, Equal, String, Semicolon, If, LeftParen, Identifier, BangEqual, Nil,
            RightParen, LeftBrace, Print, Identifier, Semicolon, RightBrace, Eof
        ]
    );
}

#[test]
fn test_lexemes_and_literals() {
    let (tokens, errors) = scan("var pi = 3.14159;");
    assert!(errors.is_empty());

    assert_eq!(tokens[0].lexeme, "var");
    assert_eq!(tokens[1].lexeme, "pi");
    assert_eq!(tokens[3].lexeme, "3.14159");
    assert_eq!(tokens[3].literal, Some(Literal::Number(3.14159)));

    // Only literal kinds carry a payload
    assert!(tokens[0].literal.is_none());
    assert!(tokens[2].literal.is_none());
}

#[test]
fn test_token_dump_format() {
    let (tokens, _) = scan("var x = \"ok\";");

    let dump: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        dump,
        vec![
            "VAR var ",
            "IDENTIFIER x ",
            "EQUAL = ",
            "STRING \"ok\" ok",
            "SEMICOLON ; ",
            "EOF_LOX  ",
        ]
    );
}

#[test]
fn test_line_numbers_across_program() {
    let source = "var a = 1;\nvar b = 2;\n\nprint a + b;";
    let (tokens, errors) = scan(source);
    assert!(errors.is_empty());

    assert_eq!(tokens[0].line, 1); // var
    assert_eq!(tokens[5].line, 2); // second var
    assert_eq!(tokens[10].line, 4); // print
    assert_eq!(tokens.last().unwrap().line, 4);
}

#[test]
fn test_errors_do_not_abort_the_scan() {
    let source = "var ok = 1;\n~\nvar also_ok = 2;";
    let (tokens, errors) = scan(source);

    assert_eq!(
        errors,
        vec![ScanError::UnexpectedCharacter { ch: '~', line: 2 }]
    );

    // Everything around the bad character still tokenizes
    let identifiers: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Identifier)
        .map(|t| t.lexeme)
        .collect();
    assert_eq!(identifiers, vec!["ok", "also_ok"]);
}

#[test]
fn test_unterminated_string_reports_final_line() {
    let (tokens, errors) = scan("print\n\"runs\noff the end");

    assert_eq!(errors, vec![ScanError::UnterminatedString { line: 3 }]);
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Print, TokenKind::Eof]);
}

#[test]
fn test_token_serialization() {
    let (tokens, _) = scan("fun add(a, b) { return a + b; }");

    let json = serde_json::to_string(&tokens).expect("tokens serialize");
    let restored: Vec<Token<'_>> = serde_json::from_str(&json).expect("tokens deserialize");
    assert_eq!(tokens, restored);
}
