//! Assertion primitives evaluated against resolved subject values.
//!
//! The matcher set is a closed enum: adding an assertion kind means adding a
//! variant here, not plugging in dynamic predicate objects. Negation is not a
//! matcher property; the owning check applies `!result` uniformly.

use regex::Regex;

use crate::error::{ConfGuardError, Result};
use crate::parser::ConfigDocument;

/// A subject resolved to something a matcher can inspect.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The subject does not exist (missing key, no value).
    Absent,
    /// A derived boolean, e.g. a token-membership test.
    Bool(bool),
    /// A derived count, e.g. number of values under a key.
    Count(u64),
    /// Free text, e.g. captured command stdout.
    Text(String),
    /// A sequence of values or tokens.
    Values(Vec<String>),
    /// A whole parsed document.
    Document(ConfigDocument),
}

impl Value {
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Bool(_) => "bool",
            Self::Count(_) => "count",
            Self::Text(_) => "text",
            Self::Values(_) => "values",
            Self::Document(_) => "document",
        }
    }

    /// Human-readable rendering for verdict reports.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Absent => "(absent)".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Count(n) => n.to_string(),
            Self::Text(t) => t.clone(),
            Self::Values(v) => format!("[{}]", v.join(", ")),
            Self::Document(d) => {
                let keys: Vec<_> = d.keys().collect();
                format!("{{{} entries: {}}}", d.len(), keys.join(", "))
            }
        }
    }
}

/// Assertion kinds understood by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    /// True iff a document, sequence or text subject has zero entries.
    IsEmpty,
    /// True iff the subject is absent.
    IsNil,
    /// True iff the subject is a false boolean (absence counts as false).
    IsFalse,
    /// True iff the given element is a member of a sequence subject.
    Includes(String),
    /// True iff the subject, coerced to an integer count, is >= the bound.
    AtLeast(u64),
    /// True iff the regex is found anywhere in a text subject (search, not
    /// full match).
    MatchesPattern(String),
}

impl Matcher {
    /// Evaluate the assertion against a resolved value.
    ///
    /// # Errors
    /// Returns `TypeMismatch` when the value kind is not one the matcher can
    /// inspect and `InvalidPattern` for an uncompilable regex. Both resolve
    /// the owning check to Error, never Fail.
    pub fn evaluate(&self, actual: &Value) -> Result<bool> {
        match self {
            Self::IsEmpty => match actual {
                Value::Absent => Ok(true),
                Value::Text(t) => Ok(t.is_empty()),
                Value::Values(v) => Ok(v.is_empty()),
                Value::Document(d) => Ok(d.is_empty()),
                _ => Err(self.mismatch(actual)),
            },
            Self::IsNil => Ok(matches!(actual, Value::Absent)),
            Self::IsFalse => match actual {
                Value::Absent => Ok(true),
                Value::Bool(b) => Ok(!b),
                _ => Err(self.mismatch(actual)),
            },
            Self::Includes(element) => match actual {
                Value::Values(v) => Ok(v.iter().any(|e| e == element)),
                _ => Err(self.mismatch(actual)),
            },
            Self::AtLeast(bound) => Ok(self.coerce_count(actual)? >= *bound),
            Self::MatchesPattern(pattern) => {
                let regex =
                    Regex::new(pattern).map_err(|source| ConfGuardError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })?;
                match actual {
                    Value::Text(t) => Ok(regex.is_match(t)),
                    _ => Err(self.mismatch(actual)),
                }
            }
        }
    }

    /// Expectation text for verdict reports, e.g. `includes "dns"`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::IsEmpty => "is empty".to_string(),
            Self::IsNil => "is nil".to_string(),
            Self::IsFalse => "is false".to_string(),
            Self::Includes(element) => format!("includes {element:?}"),
            Self::AtLeast(bound) => format!(">= {bound}"),
            Self::MatchesPattern(pattern) => format!("matches /{pattern}/"),
        }
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::IsEmpty => "is_empty",
            Self::IsNil => "is_nil",
            Self::IsFalse => "is_false",
            Self::Includes(_) => "includes",
            Self::AtLeast(_) => "at_least",
            Self::MatchesPattern(_) => "matches_pattern",
        }
    }

    fn coerce_count(&self, actual: &Value) -> Result<u64> {
        match actual {
            Value::Count(n) => Ok(*n),
            Value::Values(v) => Ok(v.len() as u64),
            Value::Text(t) => t.trim().parse().map_err(|_| self.mismatch(actual)),
            _ => Err(self.mismatch(actual)),
        }
    }

    fn mismatch(&self, actual: &Value) -> ConfGuardError {
        ConfGuardError::TypeMismatch {
            matcher: self.name(),
            subject: actual.type_name(),
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
