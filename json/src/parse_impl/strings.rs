use crate::{Parse, ParseError, ParseErrorKind, Parser, token::TokenKind};

impl Parse for String {
    fn parse(parser: &mut Parser) -> Result<Self, ParseError> {
        // If we have a string, return the value decoded by the scanner
        // Otherwise, we expected a string, but didn't get one - error
        match parser.advance()?.kind {
            TokenKind::String(val) => Ok(val),
            _ => Err(parser.make_err_prev(ParseErrorKind::UnexpectedToken)),
        }
    }
}
