use thiserror::Error;

use crate::{
    scanner::{ScanError, ScanErrorKind, Scanner},
    token::{Token, TokenKind},
};

/// First grammar violation found in the input. `position` is the byte offset
/// of the offending token; `lexeme` is its source text.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at line {line}, offset {position} (near {lexeme:?})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub position: usize,
    pub lexeme: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    // Scanner specific errors
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unrecognised symbol")]
    UnrecognisedSymbol,
    #[error("unrecognised keyword")]
    UnrecognisedKeyword,
    #[error("invalid number")]
    InvalidNumber,
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,

    // Parser specific errors
    #[error("trailing characters after value")]
    TrailingCharacters,
    #[error("expected {0}")]
    ExpectedToken(TokenKind),
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("missing field {0:?}")]
    MissingField(&'static str),

    // Both
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

impl From<ScanError> for ParseError {
    fn from(err: ScanError) -> Self {
        let kind = match err.kind {
            ScanErrorKind::UnexpectedEndOfInput => ParseErrorKind::UnexpectedEndOfInput,
            ScanErrorKind::UnterminatedString => ParseErrorKind::UnterminatedString,
            ScanErrorKind::UnrecognisedSymbol => ParseErrorKind::UnrecognisedSymbol,
            ScanErrorKind::UnrecognisedKeyword => ParseErrorKind::UnrecognisedKeyword,
            ScanErrorKind::InvalidNumber => ParseErrorKind::InvalidNumber,
            ScanErrorKind::InvalidEscapeSequence => ParseErrorKind::InvalidEscapeSequence,
        };

        Self {
            kind,
            line: err.line,
            position: err.position,
            lexeme: err.lexeme,
        }
    }
}

/// One grammar production, implemented per type and composed recursively.
pub trait Parse {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError>
    where
        Self: Sized;
}

#[derive(Debug, Clone)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,

    prev: Option<Token>,
    current: Option<Token>,
}

impl<'a> Parser<'a> {
    // The primitives below are pub because the derive macros' generated code
    // drives the parser from outside this crate

    pub fn make_err(&self, kind: ParseErrorKind) -> ParseError {
        // Report against the current token, falling back to the previous one
        // (and to the start of input when nothing was scanned at all)
        let err_token = self.current.clone().or_else(|| self.prev.clone());
        Self::err_at(kind, err_token)
    }

    // Make err with prev token instead of current
    pub fn make_err_prev(&self, kind: ParseErrorKind) -> ParseError {
        Self::err_at(kind, self.prev.clone())
    }

    fn err_at(kind: ParseErrorKind, token: Option<Token>) -> ParseError {
        match token {
            Some(token) => ParseError {
                kind,
                line: token.line,
                position: token.position,
                lexeme: token.lexeme,
            },
            None => ParseError {
                kind,
                line: 1,
                position: 0,
                lexeme: String::new(),
            },
        }
    }

    pub fn parse<T: Parse>(source: &str) -> Result<T, ParseError> {
        let mut scanner = Scanner::init(source);
        let current = scanner.next_token()?;

        let mut parser = Parser {
            scanner,
            current,
            prev: None,
        };

        let result = T::parse(&mut parser)?;
        if parser.current.is_some() {
            return Err(parser.make_err(ParseErrorKind::TrailingCharacters));
        }

        Ok(result)
    }

    pub fn consume(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.check(kind.clone())? {
            self.advance()?;
            return Ok(());
        }

        Err(self.make_err(ParseErrorKind::ExpectedToken(kind)))
    }

    pub fn check(&self, kind: TokenKind) -> Result<bool, ParseError> {
        Ok(self.peek()?.kind == kind)
    }

    pub fn peek(&self) -> Result<Token, ParseError> {
        self.current
            .clone()
            .ok_or(self.make_err(ParseErrorKind::UnexpectedEndOfInput))
    }

    pub fn advance(&mut self) -> Result<Token, ParseError> {
        let consumed = self
            .current
            .take()
            .ok_or(Self::err_at(ParseErrorKind::UnexpectedEndOfInput, self.prev.clone()))?;

        self.prev = Some(consumed.clone());
        self.current = self.scanner.next_token()?;

        Ok(consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_value::JsonValue;
    use std::collections::HashMap;

    #[test]
    fn test_top_level() {
        let cases = vec![
            ("[]", JsonValue::Array(vec![])),
            ("{}", JsonValue::Object(HashMap::new())),
            ("1234", JsonValue::Number(1234.0)),
            ("1234e5", JsonValue::Number(1234e5)),
            ("1234.567", JsonValue::Number(1234.567)),
            ("1234.567e5", JsonValue::Number(1234.567e5)),
            ("-17", JsonValue::Number(-17.0)),
            ("0", JsonValue::Number(0.0)),
            (r#""str a_b""#, JsonValue::String("str a_b".to_string())),
            ("true", JsonValue::Bool(true)),
            ("false", JsonValue::Bool(false)),
            ("null", JsonValue::Null),
        ];

        for (source, expected) in cases {
            let result = Parser::parse(source);
            assert_eq!(Ok(expected), result, "source: {source}");
        }
    }

    #[test]
    fn test_surrounding_whitespace() {
        let result = Parser::parse::<JsonValue>("  { \"k\" : \"v\" }  ");
        let expected = JsonValue::Object(HashMap::from([(
            "k".to_string(),
            JsonValue::String("v".to_string()),
        )]));
        assert_eq!(Ok(expected), result);
    }

    #[test]
    fn test_nested() {
        let result = Parser::parse::<JsonValue>(r#"{"arr":[1,{"nested":true}]}"#).unwrap();

        let arr = result.as_object()["arr"].as_array();
        assert_eq!(2, arr.len());
        assert_eq!(1.0, arr[0].as_number());
        assert!(arr[1].as_object()["nested"].as_boolean());
    }

    #[test]
    fn test_empty_input() {
        let result = Parser::parse::<JsonValue>("");
        assert_eq!(
            Err(ParseError {
                kind: ParseErrorKind::UnexpectedEndOfInput,
                line: 1,
                position: 0,
                lexeme: String::new(),
            }),
            result
        );
    }

    #[test]
    fn test_whitespace_only_input() {
        let result = Parser::parse::<JsonValue>(" \t\n ");
        assert_eq!(
            Err(ParseErrorKind::UnexpectedEndOfInput),
            result.map_err(|x| x.kind)
        );
    }

    #[test]
    fn test_invalid_json() {
        let cases = vec![
            ("[,]", ParseErrorKind::UnexpectedToken),
            ("{", ParseErrorKind::UnexpectedEndOfInput),
            ("{} []", ParseErrorKind::TrailingCharacters),
            ("1234a", ParseErrorKind::InvalidNumber),
            ("0123", ParseErrorKind::InvalidNumber),
            (r#"["trailing", "comma",]"#, ParseErrorKind::UnexpectedToken),
            (r#"{"trailing": "comma",}"#, ParseErrorKind::UnexpectedToken),
            (
                r#"["no" "comma"]"#,
                ParseErrorKind::ExpectedToken(TokenKind::RBracket),
            ),
            ("{ true: 5 }", ParseErrorKind::UnexpectedToken),
            ("{ 10: 5 }", ParseErrorKind::UnexpectedToken),
            ("{ some_prop: 5 }", ParseErrorKind::UnrecognisedKeyword),
            ("^", ParseErrorKind::UnrecognisedSymbol),
            ("€", ParseErrorKind::UnrecognisedSymbol),
            ("[1, €]", ParseErrorKind::UnrecognisedSymbol),
            (r#""unclosed string"#, ParseErrorKind::UnexpectedEndOfInput),
            ("[1, 2 3]", ParseErrorKind::ExpectedToken(TokenKind::RBracket)),
            (
                r#"{"key" "value"}"#,
                ParseErrorKind::ExpectedToken(TokenKind::Colon),
            ),
            (r#"{"key": "value""#, ParseErrorKind::UnexpectedEndOfInput),
            ("[null,]", ParseErrorKind::UnexpectedToken),
            (r#"{"a": null,}"#, ParseErrorKind::UnexpectedToken),
            ("tru", ParseErrorKind::UnrecognisedKeyword),
            ("nulll", ParseErrorKind::UnrecognisedKeyword),
            ("[--1]", ParseErrorKind::InvalidNumber),
            ("[+1]", ParseErrorKind::UnrecognisedSymbol),
            (r#"{null: "value"}"#, ParseErrorKind::UnexpectedToken),
            (r#"{"key": undefined}"#, ParseErrorKind::UnrecognisedKeyword),
            (r#""\uZZZZ""#, ParseErrorKind::InvalidEscapeSequence),
            (
                r#"{"\uD800": "high surrogate only"}"#,
                ParseErrorKind::InvalidEscapeSequence,
            ),
            (r#""bad\escape""#, ParseErrorKind::InvalidEscapeSequence),
        ];

        for (source, expected) in cases {
            let result = Parser::parse::<JsonValue>(source);
            assert_eq!(
                Err(expected),
                result.map_err(|x| x.kind),
                "Ensure the following JSON is invalid: {source}"
            );
        }
    }

    #[test]
    fn test_error_reports_offset() {
        let result = Parser::parse::<JsonValue>(r#"{"prop" 5}"#);
        assert_eq!(
            Err(ParseError {
                kind: ParseErrorKind::ExpectedToken(TokenKind::Colon),
                line: 1,
                position: 8,
                lexeme: "5".to_string(),
            }),
            result
        );
    }
}
