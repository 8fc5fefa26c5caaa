//! Profile store for collected answers
//!
//! This module holds the accumulating record of answers collected during
//! the conversation, keyed by the field name declared on each step.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A scalar answer value stored in the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileValue {
    Text(String),
    Number(f64),
}

impl ProfileValue {
    /// Borrow the text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ProfileValue::Text(s) => Some(s),
            ProfileValue::Number(_) => None,
        }
    }
}

impl From<&str> for ProfileValue {
    fn from(value: &str) -> Self {
        ProfileValue::Text(value.to_string())
    }
}

impl From<String> for ProfileValue {
    fn from(value: String) -> Self {
        ProfileValue::Text(value)
    }
}

impl From<f64> for ProfileValue {
    fn from(value: f64) -> Self {
        ProfileValue::Number(value)
    }
}

/// Accumulated answers keyed by field name.
///
/// Written only by the conversation engine on user-response events; values
/// are never removed for the lifetime of the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStore {
    fields: HashMap<String, ProfileValue>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for a field
    pub fn set(&mut self, field: &str, value: ProfileValue) {
        self.fields.insert(field.to_string(), value);
    }

    /// Get the raw value for a field
    pub fn get(&self, field: &str) -> Option<&ProfileValue> {
        self.fields.get(field)
    }

    /// Get the text value for a field, if present and textual
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(ProfileValue::as_text)
    }

    /// Get a numeric value for a field.
    ///
    /// Returns the number directly for numeric values, or parses a text
    /// value; `None` if the field is absent or not parseable as a number.
    pub fn number(&self, field: &str) -> Option<f64> {
        match self.fields.get(field)? {
            ProfileValue::Number(n) => Some(*n),
            ProfileValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
