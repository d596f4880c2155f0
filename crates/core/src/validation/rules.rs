//! Rule vocabulary and evaluation result types.

use std::collections::BTreeMap;

use serde::Serialize;

/// One constraint on a single field.
///
/// The vocabulary is closed: a malformed rule cannot exist at request time
/// because the table is checked by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field must be present, non-null, and (for strings) non-empty.
    Required,
    /// Value must be a JSON string.
    Text,
    /// Value must be a whole JSON number.
    Integer,
    /// Value must parse as an ISO-8601-compatible date/time; coerced to
    /// RFC 3339 in the evaluator output.
    DateTime,
    /// Value must match a standard email grammar.
    Email,
    /// Minimum character length for strings, minimum magnitude for integers.
    Min(u64),
    /// Maximum character length for strings, maximum magnitude for integers.
    Max(u64),
    /// No other active record of the entity may hold this value. The
    /// evaluator is pure, so this rule is resolved by the caller against
    /// the record store and merged into the same violation map.
    Unique,
}

/// The rule list for one field of one entity.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// Per-field violation messages, ordered by field name for stable output.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Violations(BTreeMap<String, Vec<String>>);

impl Violations {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for one field, if any.
    pub fn for_field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Fold another violation set into this one (used to merge uniqueness
    /// probe results with the pure evaluation).
    pub fn merge(&mut self, other: Violations) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }
}

/// Outcome of evaluating one payload against one entity's rule table.
///
/// `fields` holds the coerced copy of every field named in the rule table
/// that was present in the payload; unknown payload fields are discarded.
/// The coerced map is only meaningful when the evaluation (plus any
/// caller-side uniqueness probes) ends up valid.
#[derive(Debug)]
pub struct Evaluation {
    pub fields: serde_json::Map<String, serde_json::Value>,
    pub violations: Violations,
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}
