use std::fmt::Write;

/// Mirror of [`crate::Parse`]: one rendering rule per type, composed
/// recursively over the value tree.
pub trait Serialise {
    fn serialise(&self, out: &mut Serialiser);
}

/// Render a value as JSON text.
///
/// `indent == 0` produces compact output; `indent == n > 0` puts each
/// element and key/value pair on its own line at `depth * n` spaces, with
/// closing brackets aligned with their opening construct.
pub fn stringify<T: Serialise>(value: &T, indent: usize) -> String {
    let mut out = Serialiser::init(indent);
    value.serialise(&mut out);
    out.finish()
}

/// Output buffer plus the indentation state shared by every `Serialise` impl.
#[derive(Debug)]
pub struct Serialiser {
    out: String,
    indent: usize,
    depth: usize,
}

impl Serialiser {
    pub fn init(indent: usize) -> Self {
        Self {
            out: String::new(),
            indent,
            depth: 0,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn open(&mut self, bracket: char) {
        self.out.push(bracket);
        self.depth += 1;
    }

    pub fn close(&mut self, bracket: char) {
        self.depth -= 1;
        self.break_line();
        self.out.push(bracket);
    }

    // Newline plus padding when pretty-printing, nothing when compact
    pub fn break_line(&mut self) {
        if self.indent > 0 {
            self.out.push('\n');
            for _ in 0..self.depth * self.indent {
                self.out.push(' ');
            }
        }
    }

    pub fn key(&mut self, key: &str) {
        self.string(key);
        self.raw(": ");
    }

    pub fn string(&mut self, value: &str) {
        self.out.push('"');
        for c in value.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\x08' => self.out.push_str("\\b"),
                '\x0C' => self.out.push_str("\\f"),
                // Remaining control characters have no short escape
                c if (c as u32) < 0x20 => {
                    write!(self.out, "\\u{:04X}", c as u32).expect("write to String cannot fail");
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    pub fn number(&mut self, value: f64) {
        if !value.is_finite() {
            // NaN and infinities are not representable in JSON; render as null
            self.out.push_str("null");
        } else if value.fract() == 0.0 && value.abs() < 1e15 {
            write!(self.out, "{}", value as i64).expect("write to String cannot fail");
        } else {
            write!(self.out, "{value}").expect("write to String cannot fail");
        }
    }
}
