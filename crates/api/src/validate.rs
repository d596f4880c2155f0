//! Glue between the pure rule evaluator and the typed DTOs.
//!
//! Handlers accept the raw JSON body, run it through the entity's rule
//! table, and only build the per-entity struct from the coerced field map
//! once every rule (including caller-probed uniqueness) has passed.

use serde::de::DeserializeOwned;
use serde_json::Value;
use worklog_core::validation::{self, FieldRules, Violations};

use crate::error::AppError;

/// Validate a raw JSON payload against an entity's rule table and
/// deserialize the coerced fields into the typed DTO.
///
/// `extra` carries violations the caller resolved against the record store
/// (the `Unique` rules); they are merged into the evaluator's map so the
/// client sees every failure at once.
pub fn validated<T: DeserializeOwned>(
    rules: &[FieldRules],
    payload: &Value,
    extra: Violations,
) -> Result<T, AppError> {
    let map = payload
        .as_object()
        .ok_or_else(|| AppError::BadRequest("Request body must be a JSON object".into()))?;

    let mut evaluation = validation::evaluate(rules, map);
    evaluation.violations.merge(extra);

    if !evaluation.is_valid() {
        return Err(AppError::Validation(evaluation.violations));
    }

    serde_json::from_value(Value::Object(evaluation.fields))
        .map_err(|e| AppError::Internal(format!("validated payload failed to deserialize: {e}")))
}
