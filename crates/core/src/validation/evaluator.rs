//! Rule evaluation: pure logic, no database access.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use validator::ValidateEmail;

use super::rules::{Evaluation, FieldRules, Rule, Violations};

/// Evaluate an entity's full rule table against a raw JSON payload.
///
/// All rules for all fields are checked; nothing short-circuits, so the
/// caller can report every violation at once. Fields absent from the rule
/// table are dropped from the output map, and `DateTime` values are coerced
/// to canonical RFC 3339 strings on the way through.
pub fn evaluate(rules: &[FieldRules], payload: &serde_json::Map<String, Value>) -> Evaluation {
    let mut fields = serde_json::Map::new();
    let mut violations = Violations::default();

    for field_rules in rules {
        let value = payload.get(field_rules.field);
        let mut coerced = value.cloned();

        for rule in field_rules.rules {
            if let Some(message) = check_rule(*rule, value, &mut coerced) {
                violations.add(field_rules.field, message);
            }
        }

        if let Some(v) = coerced {
            if !v.is_null() {
                fields.insert(field_rules.field.to_string(), v);
            }
        }
    }

    Evaluation { fields, violations }
}

/// Check one rule against one field value. Returns the violation message on
/// failure. `coerced` is rewritten in place when a rule normalizes the value.
fn check_rule(rule: Rule, value: Option<&Value>, coerced: &mut Option<Value>) -> Option<String> {
    match rule {
        Rule::Required => check_required(value),
        Rule::Text => check_text(value),
        Rule::Integer => check_integer(value),
        Rule::DateTime => check_datetime(value, coerced),
        Rule::Email => check_email(value),
        Rule::Min(n) => check_min(value, n),
        Rule::Max(n) => check_max(value, n),
        // Resolved by the caller against the record store.
        Rule::Unique => None,
    }
}

fn check_required(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => Some("is required".into()),
        Some(Value::String(s)) if s.is_empty() => Some("is required".into()),
        _ => None,
    }
}

fn check_text(value: Option<&Value>) -> Option<String> {
    match present(value)? {
        Value::String(_) => None,
        _ => Some("must be a string".into()),
    }
}

fn check_integer(value: Option<&Value>) -> Option<String> {
    let value = present(value)?;
    if value.as_i64().is_some() {
        None
    } else {
        Some("must be an integer".into())
    }
}

fn check_datetime(value: Option<&Value>, coerced: &mut Option<Value>) -> Option<String> {
    let value = present(value)?;
    let s = match value.as_str() {
        Some(s) => s,
        None => return Some("must be a valid date".into()),
    };
    match parse_datetime(s) {
        Some(ts) => {
            *coerced = Some(Value::String(ts.to_rfc3339()));
            None
        }
        None => Some("must be a valid date".into()),
    }
}

fn check_email(value: Option<&Value>) -> Option<String> {
    let value = present(value)?;
    match value.as_str() {
        Some(s) if s.validate_email() => None,
        _ => Some("must be a valid email address".into()),
    }
}

fn check_min(value: Option<&Value>, min: u64) -> Option<String> {
    match present(value)? {
        Value::String(s) if (s.chars().count() as u64) < min => {
            Some(format!("must be at least {min} characters"))
        }
        Value::Number(n) => match n.as_i64() {
            Some(v) if v < min as i64 => Some(format!("must be at least {min}")),
            _ => None,
        },
        _ => None,
    }
}

fn check_max(value: Option<&Value>, max: u64) -> Option<String> {
    match present(value)? {
        Value::String(s) if (s.chars().count() as u64) > max => {
            Some(format!("must not be greater than {max} characters"))
        }
        Value::Number(n) => match n.as_i64() {
            Some(v) if v > max as i64 => Some(format!("must not be greater than {max}")),
            _ => None,
        },
        _ => None,
    }
}

/// Absent and null values pass every rule except `Required`.
fn present(value: Option<&Value>) -> Option<&Value> {
    match value {
        Some(v) if !v.is_null() => Some(v),
        _ => None,
    }
}

/// Accept RFC 3339 first, then the naive layouts clients commonly send.
/// Naive values are interpreted as UTC.
fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    for layout in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: &[FieldRules] = &[
        FieldRules {
            field: "name",
            rules: &[Rule::Required, Rule::Text, Rule::Max(10)],
        },
        FieldRules {
            field: "id_clients",
            rules: &[Rule::Required, Rule::Integer, Rule::Min(1)],
        },
    ];

    fn payload(pairs: &[(&str, Value)]) -> serde_json::Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn valid_payload_passes() {
        let result = evaluate(RULES, &payload(&[("name", json!("Acme")), ("id_clients", json!(3))]));
        assert!(result.is_valid());
        assert_eq!(result.fields["name"], json!("Acme"));
    }

    #[test]
    fn missing_required_field_fails() {
        let result = evaluate(RULES, &payload(&[("id_clients", json!(3))]));
        assert!(!result.is_valid());
        assert_eq!(
            result.violations.for_field("name").unwrap(),
            &["is required".to_string()]
        );
    }

    #[test]
    fn null_and_empty_string_count_as_missing() {
        let result = evaluate(RULES, &payload(&[("name", Value::Null), ("id_clients", json!(1))]));
        assert!(!result.is_valid());

        let result = evaluate(RULES, &payload(&[("name", json!("")), ("id_clients", json!(1))]));
        assert!(!result.is_valid());
    }

    #[test]
    fn all_fields_reported_not_just_first() {
        let result = evaluate(RULES, &payload(&[]));
        assert!(result.violations.for_field("name").is_some());
        assert!(result.violations.for_field("id_clients").is_some());
    }

    #[test]
    fn wrong_type_reported_alongside_other_rules() {
        // A too-long number for a text field trips Text but not Max.
        let result = evaluate(RULES, &payload(&[("name", json!(42)), ("id_clients", json!("x"))]));
        assert_eq!(
            result.violations.for_field("name").unwrap(),
            &["must be a string".to_string()]
        );
        assert_eq!(
            result.violations.for_field("id_clients").unwrap(),
            &["must be an integer".to_string()]
        );
    }

    #[test]
    fn max_length_counts_characters() {
        let result = evaluate(
            RULES,
            &payload(&[("name", json!("elevenchars")), ("id_clients", json!(1))]),
        );
        assert_eq!(
            result.violations.for_field("name").unwrap(),
            &["must not be greater than 10 characters".to_string()]
        );
    }

    #[test]
    fn min_applies_to_integer_magnitude() {
        let result = evaluate(RULES, &payload(&[("name", json!("a")), ("id_clients", json!(0))]));
        assert_eq!(
            result.violations.for_field("id_clients").unwrap(),
            &["must be at least 1".to_string()]
        );
    }

    #[test]
    fn float_is_not_an_integer() {
        let result = evaluate(RULES, &payload(&[("name", json!("a")), ("id_clients", json!(1.5))]));
        assert!(result.violations.for_field("id_clients").is_some());
    }

    #[test]
    fn unknown_payload_fields_are_discarded() {
        let result = evaluate(
            RULES,
            &payload(&[("name", json!("a")), ("id_clients", json!(1)), ("admin", json!(true))]),
        );
        assert!(result.is_valid());
        assert!(!result.fields.contains_key("admin"));
    }

    #[test]
    fn email_rule_uses_standard_grammar() {
        const EMAIL: &[FieldRules] = &[FieldRules {
            field: "email",
            rules: &[Rule::Required, Rule::Email],
        }];
        let ok = evaluate(EMAIL, &payload(&[("email", json!("a@example.com"))]));
        assert!(ok.is_valid());

        let bad = evaluate(EMAIL, &payload(&[("email", json!("not-an-email"))]));
        assert_eq!(
            bad.violations.for_field("email").unwrap(),
            &["must be a valid email address".to_string()]
        );
    }

    #[test]
    fn datetime_accepts_iso_layouts_and_coerces_to_rfc3339() {
        const DATES: &[FieldRules] = &[FieldRules {
            field: "start_time",
            rules: &[Rule::Required, Rule::DateTime],
        }];
        for input in [
            "2021-04-28T17:39:37Z",
            "2021-04-28T17:39:37",
            "2021-04-28 17:39:37",
            "2021-04-28",
        ] {
            let result = evaluate(DATES, &payload(&[("start_time", json!(input))]));
            assert!(result.is_valid(), "{input} should parse");
            let coerced = result.fields["start_time"].as_str().unwrap();
            assert!(coerced.starts_with("2021-04-28"), "{coerced}");
            assert!(
                DateTime::parse_from_rfc3339(coerced).is_ok(),
                "{coerced} should be RFC 3339"
            );
        }

        let bad = evaluate(DATES, &payload(&[("start_time", json!("yesterday"))]));
        assert!(!bad.is_valid());
    }

    #[test]
    fn multiple_violations_accumulate_on_one_field() {
        const STRICT: &[FieldRules] = &[FieldRules {
            field: "email",
            rules: &[Rule::Required, Rule::Email, Rule::Max(5)],
        }];
        let result = evaluate(STRICT, &payload(&[("email", json!("definitely-wrong"))]));
        assert_eq!(result.violations.for_field("email").unwrap().len(), 2);
    }

    #[test]
    fn unique_marker_is_inert_here() {
        const UNIQ: &[FieldRules] = &[FieldRules {
            field: "username",
            rules: &[Rule::Required, Rule::Unique],
        }];
        let result = evaluate(UNIQ, &payload(&[("username", json!("taken"))]));
        assert!(result.is_valid());
    }
}
