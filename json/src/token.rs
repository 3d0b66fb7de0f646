use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    /// Byte offset of the token's first character in the source text.
    pub position: usize,
    pub lexeme: String,
}

impl Token {
    pub fn init(kind: TokenKind, line: usize, position: usize, lexeme: &str) -> Self {
        Self {
            kind,
            line,
            position,
            lexeme: lexeme.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    LCurlyBracket,
    RCurlyBracket,

    LBracket,
    RBracket,

    Colon,
    Comma,

    String(String),
    Number,
    Bool,
    Null,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LCurlyBracket => "'{'",
            Self::RCurlyBracket => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::String(_) => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::Null => "null",
        };

        write!(f, "{name}")
    }
}
