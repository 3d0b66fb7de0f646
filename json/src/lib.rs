mod json_value;
mod parse_impl;
mod parser;
mod scanner;
mod serialise;
mod serialise_impl;
mod token;

pub use json_macros::{JsonDeserialise, JsonSerialise};
pub use json_value::JsonValue;
pub use parser::{Parse, ParseError, ParseErrorKind, Parser};
pub use serialise::{Serialise, Serialiser};
pub use token::TokenKind;

/// Parse a complete JSON document into a [`JsonValue`] tree.
///
/// Fails with the first grammar violation, or if non-whitespace input
/// remains after the value.
pub fn parse(input: &str) -> Result<JsonValue, ParseError> {
    Parser::parse(input)
}

/// Render a value as JSON text.
///
/// `indent == 0` is compact; `indent == n > 0` pretty-prints with `n`
/// spaces per nesting level.
pub fn stringify<T: Serialise>(value: &T, indent: usize) -> String {
    serialise::stringify(value, indent)
}
