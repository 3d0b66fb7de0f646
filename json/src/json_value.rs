use std::collections::HashMap;

/// A parsed JSON document: an owned tree with exactly the six grammar variants.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Object(HashMap<String, JsonValue>),
    Array(Vec<JsonValue>),

    String(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl JsonValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    // Asking for the wrong variant is a programmer error, not a data error,
    // so the extractors panic rather than coerce

    pub fn as_boolean(&self) -> bool {
        match self {
            Self::Bool(val) => *val,
            other => panic!("expected boolean, got {}", other.kind_name()),
        }
    }

    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(val) => *val,
            other => panic!("expected number, got {}", other.kind_name()),
        }
    }

    pub fn as_string(&self) -> &str {
        match self {
            Self::String(val) => val,
            other => panic!("expected string, got {}", other.kind_name()),
        }
    }

    pub fn as_array(&self) -> &[JsonValue] {
        match self {
            Self::Array(elems) => elems,
            other => panic!("expected array, got {}", other.kind_name()),
        }
    }

    pub fn as_object(&self) -> &HashMap<String, JsonValue> {
        match self {
            Self::Object(props) => props,
            other => panic!("expected object, got {}", other.kind_name()),
        }
    }
}
