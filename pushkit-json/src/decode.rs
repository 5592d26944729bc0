//! JSON text to value tree

use crate::error::DecodeError;
use crate::options::{ReadingOptions, MAX_DEPTH};
use crate::value::JsonValue;

/// Decode `text` into a value tree.
///
/// The document root must be an object or array. Integer literals that fit
/// in `i64` decode exactly; every other number decodes as `f64`. Any syntax
/// error, trailing data included, fails the whole call, as does nesting
/// deeper than [`MAX_DEPTH`].
///
/// Decoded trees are owned, so `mutable_containers` does not change the
/// result.
pub fn decode(text: &str, _options: ReadingOptions) -> Result<JsonValue, DecodeError> {
    let raw: serde_json::Value = serde_json::from_str(text)?;
    let value = JsonValue::from(raw);
    if !value.is_collection() {
        return Err(DecodeError::NotACollection { kind: value.kind() });
    }
    if depth(&value) > MAX_DEPTH {
        return Err(DecodeError::DepthLimitExceeded { limit: MAX_DEPTH });
    }
    Ok(value)
}

/// Decode UTF-8 `bytes`; invalid UTF-8 is reported as malformed input.
pub fn decode_slice(bytes: &[u8], options: ReadingOptions) -> Result<JsonValue, DecodeError> {
    let text = std::str::from_utf8(bytes)?;
    decode(text, options)
}

/// Collection nesting depth; the parser already bounds the recursion.
fn depth(value: &JsonValue) -> usize {
    match value {
        JsonValue::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        JsonValue::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorCode;
    use crate::value::JsonNumber;

    fn decode_default(text: &str) -> Result<JsonValue, DecodeError> {
        decode(text, ReadingOptions::default())
    }

    #[test]
    fn test_malformed_inputs_fail() {
        let cases = [
            "{\"a\": }",
            "not json",
            "",
            "{\"a\": \"unterminated}",
            "[1, 2",
            "[1, 2]]",
            "{\"a\": 1} trailing",
            "[\"bad \\q escape\"]",
            "{'a': 1}",
            "[01]",
            "[NaN]",
        ];

        for text in cases {
            let err = decode_default(text).unwrap_err();
            assert!(
                matches!(err, DecodeError::Syntax(_)),
                "{text:?} should be a syntax error, got {err:?}"
            );
            assert_eq!(err.code(), DecodeErrorCode::Malformed);
        }
    }

    #[test]
    fn test_scalar_root_rejected() {
        let cases = [
            ("\"bare\"", "string"),
            ("42", "number"),
            ("true", "boolean"),
            ("null", "null"),
        ];

        for (text, kind) in cases {
            match decode_default(text) {
                Err(DecodeError::NotACollection { kind: got }) => assert_eq!(got, kind),
                other => panic!("{text:?} decoded unexpectedly: {other:?}"),
            }
        }
    }

    #[test]
    fn test_integers_stay_exact() {
        let value = decode_default("[9223372036854775807, -9223372036854775808, 0, -1]").unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items[0].as_i64(), Some(i64::MAX));
        assert_eq!(items[1].as_i64(), Some(i64::MIN));
        assert_eq!(items[2].as_i64(), Some(0));
        assert_eq!(items[3].as_i64(), Some(-1));
    }

    #[test]
    fn test_out_of_range_and_fractional_fall_back_to_float() {
        let value = decode_default("[9223372036854775808, 1.5, 1e3, 2E-2]").unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(
            items[0],
            JsonValue::Number(JsonNumber::Float(9_223_372_036_854_775_808.0))
        );
        assert_eq!(items[1], JsonValue::from(1.5));
        assert_eq!(items[2], JsonValue::from(1000.0));
        assert_eq!(items[3], JsonValue::from(0.02));
    }

    #[test]
    fn test_escapes_and_unicode() {
        let value =
            decode_default(r#"{"s":"tab\tquote\"slash\/snow\u2603pair\ud83d\ude00"}"#).unwrap();
        assert_eq!(
            value.get("s").and_then(JsonValue::as_str),
            Some("tab\tquote\"slash/snow\u{2603}pair\u{1F600}")
        );
    }

    #[test]
    fn test_nested_structures_and_whitespace() {
        let value = decode_default(" \n{ \"a\" : [ { \"b\" : null } , [ ] ] , \"c\" : { } }\t").unwrap();
        let a = value.get("a").and_then(JsonValue::as_array).unwrap();
        assert!(a[0].get("b").unwrap().is_null());
        assert_eq!(a[1].as_array().map(Vec::len), Some(0));
        assert_eq!(value.get("c").and_then(JsonValue::as_object).map(|m| m.len()), Some(0));
    }

    #[test]
    fn test_duplicate_keys_keep_last_value() {
        let value = decode_default(r#"{"a":1,"a":2}"#).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a").and_then(JsonValue::as_i64), Some(2));
    }

    #[test]
    fn test_reading_options_do_not_change_result() {
        let text = r#"{"tags":["a","b"],"badge":3}"#;
        let mutable = decode(text, ReadingOptions::default()).unwrap();
        let immutable = decode(
            text,
            ReadingOptions {
                mutable_containers: false,
            },
        )
        .unwrap();
        assert_eq!(mutable, immutable);
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |levels: usize| format!("{}{}", "[".repeat(levels), "]".repeat(levels));

        let value = decode_default(&nested(MAX_DEPTH)).unwrap();
        assert_eq!(depth(&value), MAX_DEPTH);

        let err = decode_default(&nested(MAX_DEPTH + 1)).unwrap_err();
        assert!(matches!(err, DecodeError::DepthLimitExceeded { limit } if limit == MAX_DEPTH));
        assert_eq!(err.code(), DecodeErrorCode::Malformed);

        // Far past the limit the parser itself gives up.
        let err = decode_default(&nested(10_000)).unwrap_err();
        assert_eq!(err.code(), DecodeErrorCode::Malformed);

        let wide = r#"{"a":[[1]],"b":{"c":{"d":[]}},"e":2}"#;
        assert_eq!(depth(&decode_default(wide).unwrap()), 4);
    }

    #[test]
    fn test_decode_slice() {
        let value = decode_slice(b"[\"ok\"]", ReadingOptions::default()).unwrap();
        assert_eq!(value.as_array().unwrap()[0].as_str(), Some("ok"));

        let err = decode_slice(&[b'[', b'"', 0xff, b'"', b']'], ReadingOptions::default())
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidUtf8(_)));
        assert_eq!(err.code(), DecodeErrorCode::Malformed);
    }
}
