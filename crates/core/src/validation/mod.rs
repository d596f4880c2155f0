//! Declarative field validation.
//!
//! Each entity carries a static rule table ([`rulebook`]) drawn from a closed
//! rule vocabulary ([`rules::Rule`]). The evaluator ([`evaluator::evaluate`])
//! is pure: it checks every rule of every field against a raw JSON payload
//! and aggregates per-field violations. Uniqueness is the one rule that needs
//! the record store, so [`rules::Rule::Unique`] is a marker the caller
//! resolves before deciding the outcome.

pub mod evaluator;
pub mod rulebook;
pub mod rules;

pub use evaluator::evaluate;
pub use rules::{Evaluation, FieldRules, Rule, Violations};
