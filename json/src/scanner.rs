use thiserror::Error;

use crate::token::{Token, TokenKind};

static BUG_END_OF_INPUT: &str = "[BUG] Reached end of input when shouldn't be possible";

#[derive(Debug, Clone, PartialEq)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
    pub position: usize,
    pub lexeme: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
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
}

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    token_start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn init(source: &'a str) -> Self {
        Self {
            source,
            current: 0,
            token_start: 0,
            line: 1,
        }
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        let start = self.token_start;
        self.token_start = self.current;

        Token::init(kind, self.line, start, &self.source[start..self.current])
    }

    fn make_err(&self, kind: ScanErrorKind) -> ScanError {
        self.make_err_at(kind, self.token_start)
    }

    // String errors point at the offending character rather than the token start
    fn make_err_at(&self, kind: ScanErrorKind, position: usize) -> ScanError {
        ScanError {
            kind,
            line: self.line,
            position,
            lexeme: self.source[self.token_start..self.current].to_string(),
        }
    }

    fn advance(&mut self) -> Result<char, ScanError> {
        // When advancing, make sure to advance the correct number of bytes
        // A character such as an emoji may be more than 1 byte, so increase `current` by the number
        // of bytes of the char we advanced past
        let remaining = &self.source[self.current..];
        let mut chars = remaining.char_indices();
        let (_, c) = chars
            .next()
            .ok_or(self.make_err(ScanErrorKind::UnexpectedEndOfInput))?;
        let (next_byte_index, _) = chars.next().unwrap_or((remaining.len(), ' '));

        self.current += next_byte_index;
        Ok(c)
    }

    fn peek(&self) -> Result<char, ScanError> {
        self.source[self.current..]
            .chars()
            .next()
            .ok_or(self.make_err(ScanErrorKind::UnexpectedEndOfInput))
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Ok(' ' | '\t' | '\r') => {
                    self.advance().expect(BUG_END_OF_INPUT);
                }
                Ok('\n') => {
                    self.line += 1;
                    self.advance().expect(BUG_END_OF_INPUT);
                }
                _ => {
                    return;
                }
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn matches(&mut self, c: char) -> bool {
        // If not end of input and character matches, return true
        if matches!(self.peek(), Ok(chr) if chr == c) {
            self.advance().expect(BUG_END_OF_INPUT);
            return true;
        }

        false
    }

    fn matches_any(&mut self, chars: &[char]) -> bool {
        // If not end of input and character matches, return true
        for c in chars {
            if matches!(self.peek(), Ok(chr) if chr == *c) {
                self.advance().expect(BUG_END_OF_INPUT);
                return true;
            }
        }

        false
    }

    fn digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Ok(c) if c.is_ascii_digit()) {
            self.advance().expect(BUG_END_OF_INPUT);
            count += 1;
        }

        count
    }

    // Grammar: -? (0 | [1-9][0-9]*) ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?
    // `first` is the already-consumed leading character (a digit or `-`)
    fn number(&mut self, first: char) -> Result<Token, ScanError> {
        let int_start = if first == '-' {
            match self.peek() {
                Ok(c) if c.is_ascii_digit() => self.advance().expect(BUG_END_OF_INPUT),
                _ => return Err(self.make_err(ScanErrorKind::InvalidNumber)),
            }
        } else {
            first
        };

        // Integer part is a lone zero or a digit run without a leading zero
        if int_start == '0' {
            if matches!(self.peek(), Ok(c) if c.is_ascii_digit()) {
                return Err(self.make_err(ScanErrorKind::InvalidNumber));
            }
        } else {
            self.digits();
        }

        // Fraction part requires at least one digit after the `.`
        if self.matches('.') && self.digits() == 0 {
            return Err(self.make_err(ScanErrorKind::InvalidNumber));
        }

        // Exponent requires at least one digit, optionally signed e.g. 10e-5
        if self.matches_any(&['e', 'E']) {
            self.matches_any(&['-', '+']);

            if self.digits() == 0 {
                return Err(self.make_err(ScanErrorKind::InvalidNumber));
            }
        }

        // Reject forms like `1234a` rather than splitting them into two tokens
        if matches!(self.peek(), Ok(c) if c.is_alphabetic()) {
            return Err(self.make_err(ScanErrorKind::InvalidNumber));
        }

        Ok(self.make_token(TokenKind::Number))
    }

    fn is_end_of_string(&self) -> Result<bool, ScanError> {
        Ok(self.peek()? == '"')
    }

    fn string(&mut self) -> Result<Token, ScanError> {
        let mut str_val = String::new();
        while !self.is_end_of_string()? {
            let char_pos = self.current;
            let chr = self.advance().expect(BUG_END_OF_INPUT);
            if chr == '\n' {
                return Err(self.make_err_at(ScanErrorKind::UnterminatedString, char_pos));
            }

            if chr == '\\' {
                str_val.push(self.escape_sequence(char_pos)?);
                continue;
            }

            str_val.push(chr);
        }

        self.advance().expect(BUG_END_OF_INPUT);
        Ok(self.make_token(TokenKind::String(str_val)))
    }

    // `escape_start` is the offset of the backslash, used as the reported
    // error position for the whole sequence
    fn escape_sequence(&mut self, escape_start: usize) -> Result<char, ScanError> {
        match self.advance()? {
            '"' => Ok('"'),
            '/' => Ok('/'),
            'b' => Ok('\x08'),
            'f' => Ok('\x0C'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            '\\' => Ok('\\'),
            'u' => self.unicode_escape(escape_start),
            _ => Err(self.make_err_at(ScanErrorKind::InvalidEscapeSequence, escape_start)),
        }
    }

    fn hex4(&mut self, escape_start: usize) -> Result<u32, ScanError> {
        // Exactly four hex digits; `from_str_radix` alone is too lenient
        // since it also accepts a leading sign
        let mut hex = String::with_capacity(4);
        for _ in 0..4 {
            let c = self.advance()?;
            if !c.is_ascii_hexdigit() {
                return Err(self.make_err_at(ScanErrorKind::InvalidEscapeSequence, escape_start));
            }

            hex.push(c);
        }

        u32::from_str_radix(&hex, 16)
            .map_err(|_| self.make_err_at(ScanErrorKind::InvalidEscapeSequence, escape_start))
    }

    fn unicode_escape(&mut self, escape_start: usize) -> Result<char, ScanError> {
        let unit = self.hex4(escape_start)?;

        let code_point = match unit {
            // High surrogate: the low half must follow as another \uXXXX, and
            // the pair combines into a supplementary code point
            0xD800..=0xDBFF => {
                if !(self.matches('\\') && self.matches('u')) {
                    return Err(
                        self.make_err_at(ScanErrorKind::InvalidEscapeSequence, escape_start)
                    );
                }

                let low = self.hex4(escape_start)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(
                        self.make_err_at(ScanErrorKind::InvalidEscapeSequence, escape_start)
                    );
                }

                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
            }

            // A low surrogate on its own is never valid
            0xDC00..=0xDFFF => {
                return Err(self.make_err_at(ScanErrorKind::InvalidEscapeSequence, escape_start));
            }

            _ => unit,
        };

        char::from_u32(code_point)
            .ok_or(self.make_err_at(ScanErrorKind::InvalidEscapeSequence, escape_start))
    }

    fn keyword(&mut self) -> Result<Token, ScanError> {
        while matches!(self.peek(), Ok(c) if c.is_alphabetic()) {
            self.advance().expect(BUG_END_OF_INPUT);
        }

        let keyword = &self.source[self.token_start..self.current];
        let kind = match keyword {
            "null" => TokenKind::Null,
            "true" | "false" => TokenKind::Bool,
            _ => Err(self.make_err(ScanErrorKind::UnrecognisedKeyword))?,
        };

        Ok(self.make_token(kind))
    }

    // `char` is the already-consumed character, which may be multibyte
    fn symbol(&mut self, char: char) -> Result<Token, ScanError> {
        let kind = match char {
            '{' => TokenKind::LCurlyBracket,
            '}' => TokenKind::RCurlyBracket,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            _ => Err(self.make_err(ScanErrorKind::UnrecognisedSymbol))?,
        };

        Ok(self.make_token(kind))
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        self.skip_whitespace();

        if self.is_at_end() {
            return Ok(None);
        }

        self.token_start = self.current;

        let c = self.advance()?;

        if c.is_ascii_digit() || c == '-' {
            return self.number(c).map(Some);
        }

        if c.is_alphabetic() {
            return self.keyword().map(Some);
        }

        if c == '"' {
            return self.string().map(Some);
        }

        self.symbol(c).map(Some)
    }
}
