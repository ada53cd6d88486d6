//! Best-effort conversion of raw prompt input into typed argument values.
//!
//! Coercion never fails: when the declared type cannot be built from the
//! input, the raw string is passed on unchanged.

use super::option::{ParamKind, Value};
use tracing::debug;

/// Inputs that count as `true` for boolean parameters (compared case-insensitively).
pub const TRUTHY: [&str; 4] = ["true", "yes", "1", "y"];

/// Converts `raw` according to the declared parameter type.
pub fn coerce(raw: &str, kind: Option<ParamKind>) -> Value {
    let Some(kind) = kind else {
        return Value::Str(raw.to_string());
    };

    match kind {
        ParamKind::Bool => Value::Bool(TRUTHY.contains(&raw.to_lowercase().as_str())),
        ParamKind::List => Value::List(raw.split(',').map(|s| s.trim().to_string()).collect()),
        ParamKind::Str => Value::Str(raw.to_string()),
        ParamKind::Int => raw.parse().map(Value::Int).unwrap_or_else(|_| fallback(raw, kind)),
        ParamKind::Float => raw
            .parse()
            .map(Value::Float)
            .unwrap_or_else(|_| fallback(raw, kind)),
        ParamKind::Char => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Value::Char(c),
                _ => fallback(raw, kind),
            }
        },
    }
}

fn fallback(raw: &str, kind: ParamKind) -> Value {
    debug!(raw, ?kind, "Coercion failed, keeping raw string");
    Value::Str(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", Some(ParamKind::Int), Value::Int(42))]
    #[case("-7", Some(ParamKind::Int), Value::Int(-7))]
    #[case("xyz", Some(ParamKind::Int), Value::Str("xyz".into()))]
    #[case("4.5", Some(ParamKind::Int), Value::Str("4.5".into()))]
    #[case("99999999999999999999", Some(ParamKind::Int), Value::Str("99999999999999999999".into()))]
    #[case("1_000", Some(ParamKind::Int), Value::Str("1_000".into()))]
    #[case("4.5", Some(ParamKind::Float), Value::Float(4.5))]
    #[case("nan?", Some(ParamKind::Float), Value::Str("nan?".into()))]
    #[case("yes", Some(ParamKind::Bool), Value::Bool(true))]
    #[case("Y", Some(ParamKind::Bool), Value::Bool(true))]
    #[case("TRUE", Some(ParamKind::Bool), Value::Bool(true))]
    #[case("1", Some(ParamKind::Bool), Value::Bool(true))]
    #[case("no", Some(ParamKind::Bool), Value::Bool(false))]
    #[case("on", Some(ParamKind::Bool), Value::Bool(false))]
    #[case("x", Some(ParamKind::Char), Value::Char('x'))]
    #[case("xy", Some(ParamKind::Char), Value::Str("xy".into()))]
    #[case(" raw ", None, Value::Str(" raw ".into()))]
    #[case("42", None, Value::Str("42".into()))]
    #[case("42", Some(ParamKind::Str), Value::Str("42".into()))]
    fn test_coerce(#[case] raw: &str, #[case] kind: Option<ParamKind>, #[case] expected: Value) {
        assert_eq!(coerce(raw, kind), expected);
    }

    #[test]
    fn test_list_trims_and_keeps_empty_segments() {
        assert_eq!(
            coerce("a, b ,c", Some(ParamKind::List)),
            Value::List(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_eq!(
            coerce("a,,b,", Some(ParamKind::List)),
            Value::List(vec!["a".into(), "".into(), "b".into(), "".into()])
        );
    }
}
