use crate::json_value::JsonValue;
use crate::serialise::{Serialise, Serialiser};

impl Serialise for JsonValue {
    fn serialise(&self, out: &mut Serialiser) {
        match self {
            Self::Object(props) => props.serialise(out),
            Self::Array(elems) => elems.serialise(out),
            Self::String(val) => val.serialise(out),
            Self::Number(val) => val.serialise(out),
            Self::Bool(val) => val.serialise(out),
            Self::Null => out.raw("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{parse, stringify};

    #[test]
    fn test_compact() {
        let cases = vec![
            ("null", "null"),
            ("true", "true"),
            ("42", "42"),
            ("3.14", "3.14"),
            (r#""hello""#, r#""hello""#),
            ("[1, 2, 3]", "[1,2,3]"),
            (r#"{"name": "one"}"#, r#"{"name": "one"}"#),
            (
                r#"{"nested": {"array": [1, true, null]}}"#,
                r#"{"nested": {"array": [1,true,null]}}"#,
            ),
            ("[]", "[]"),
            ("{}", "{}"),
            ("[[], {}]", "[[],{}]"),
        ];

        for (source, expected) in cases {
            let value = parse(source).unwrap();
            assert_eq!(expected, stringify(&value, 0), "source: {source}");
        }
    }

    #[test]
    fn test_pretty_array() {
        let value = parse("[1, [2, 3]]").unwrap();
        let expected = "\
[
  1,
  [
    2,
    3
  ]
]";
        assert_eq!(expected, stringify(&value, 2));
    }

    #[test]
    fn test_pretty_object() {
        let value = parse(r#"{"b": 1, "a": {"c": true}}"#).unwrap();
        let expected = "\
{
  \"a\": {
    \"c\": true
  },
  \"b\": 1
}";
        assert_eq!(expected, stringify(&value, 2));
    }

    #[test]
    fn test_pretty_indent_width() {
        let value = parse("[1]").unwrap();
        assert_eq!("[\n    1\n]", stringify(&value, 4));
    }

    #[test]
    fn test_empty_containers_ignore_indent() {
        assert_eq!("[]", stringify(&parse("[]").unwrap(), 2));
        assert_eq!("{}", stringify(&parse("{}").unwrap(), 2));
    }

    #[test]
    fn test_keys_sorted() {
        let value = parse(r#"{"zebra": 1, "apple": 2, "mango": 3}"#).unwrap();
        assert_eq!(
            r#"{"apple": 2,"mango": 3,"zebra": 1}"#,
            stringify(&value, 0)
        );
    }

    #[test]
    fn test_string_escapes_survive() {
        let value = parse(r#""a\nb\t\"c\"""#).unwrap();
        assert_eq!("a\nb\t\"c\"", value.as_string());
        assert_eq!(r#""a\nb\t\"c\"""#, stringify(&value, 0));
    }

    #[test]
    fn test_number_round_trip() {
        let cases = vec!["0", "1", "-17", "3.14", "1e10", "6.022e23", "-5.1e-10"];

        for literal in cases {
            let x = parse(literal).unwrap().as_number();
            let reparsed = parse(&stringify(&parse(literal).unwrap(), 0)).unwrap();
            assert_eq!(x, reparsed.as_number(), "literal: {literal}");
        }
    }

    #[test]
    fn test_stringify_idempotent() {
        let sources = vec![
            r#"{"a": [1, 2, {"b": null}], "c": "text", "d": [true, false]}"#,
            "[0.5, -3, [[]], {}]",
            r#""escape © me\n""#,
        ];

        for source in sources {
            for indent in [0, 2, 4] {
                let value = parse(source).unwrap();
                let once = stringify(&value, indent);
                let twice = stringify(&parse(&once).unwrap(), indent);
                assert_eq!(once, twice, "source: {source}, indent: {indent}");
            }
        }
    }

    #[test]
    fn test_hand_built_value() {
        let value = crate::JsonValue::Object(HashMap::from([
            ("k".to_string(), crate::JsonValue::String("v".to_string())),
            ("n".to_string(), crate::JsonValue::Number(f64::NAN)),
        ]));

        assert_eq!(r#"{"k": "v","n": null}"#, stringify(&value, 0));
    }
}
