//! Identity keys and the per-run membership set.
//!
//! The destination identifies records by a single field (`categoryID`
//! or `productID`). A run builds one [`IdentitySet`] from the
//! destination collection and only ever asks it membership questions;
//! the set is never mutated afterwards and never outlives the run.

use std::collections::HashSet;

use serde_json::Value;

/// Equality key for one record identity.
///
/// Identities are numeric or string-valued. Integral JSON numbers
/// (including `2.0`) canonicalize to `Int` so that the two systems may
/// disagree on number formatting without breaking matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Int(i64),
    Str(String),
}

impl IdentityKey {
    /// Derive a key from a raw JSON value.
    ///
    /// Returns `None` for `null`, absent-style values and non-scalar
    /// shapes. Policy: a source record whose identifier derives no key
    /// can never match a destination identity and is therefore always
    /// included in the delta.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else if let Some(f) = n.as_f64() {
                    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                        Some(Self::Int(f as i64))
                    } else {
                        Some(Self::Str(f.to_string()))
                    }
                } else {
                    None
                }
            }
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Bool(b) => Some(Self::Str(b.to_string())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Set of identities already present downstream.
///
/// Built fresh per invocation, used purely for O(1) membership tests.
/// Duplicate identities in the input collapse harmlessly.
#[derive(Debug, Default)]
pub struct IdentitySet {
    keys: HashSet<IdentityKey>,
}

impl IdentitySet {
    /// Build the set from destination records, reading `field` on each.
    ///
    /// Records missing the field (or holding a non-scalar there)
    /// contribute nothing.
    pub fn from_records<'a, I>(records: I, field: &str) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let keys = records
            .into_iter()
            .filter_map(|record| record.get(field))
            .filter_map(IdentityKey::from_value)
            .collect();
        Self { keys }
    }

    pub fn contains(&self, key: &IdentityKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
