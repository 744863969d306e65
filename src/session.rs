// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Per-virtual-user session state consumed by deferred request expressions.

use crate::expression::BuildError;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// State owned by one simulated user for the duration of a scenario run.
///
/// Request definitions never hold a `Session`; the executor that owns the
/// session passes it by reference each time it evaluates a deferred request
/// expression. Attribute values are JSON so feeders and extractors can store
/// arbitrary structured data.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub scenario: String,
    pub started: DateTime<Utc>,
    attributes: HashMap<String, Value>,
}

impl Session {
    pub fn new<S: Into<String>>(scenario: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            scenario: scenario.into(),
            started: Utc::now(),
            attributes: HashMap::new(),
        }
    }

    /// Set an attribute, replacing any previous value under the same key.
    pub fn set<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// String view of an attribute; `None` when absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// String attribute required by a request expression.
    pub fn required_str(&self, key: &str) -> Result<&str, BuildError> {
        self.get_str(key).ok_or_else(|| BuildError::MissingAttribute {
            key: key.to_string(),
        })
    }
}
