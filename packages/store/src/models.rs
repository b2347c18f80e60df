//! # Profile data models
//!
//! The remote profile store hands the dashboard loosely-shaped JSON documents.
//! The session keeps them as-is: no validation, no schema, whatever was handed
//! in is what gets read back.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`ProfileRecord`] | A user's full profile document. The `uid` field, when present and non-empty, identifies the signed-in user. |
//! | [`Dias`] | The day-keyed activity records of a profile (`"2024-05-01" → {...}`). |
//!
//! Both are `Serialize + Deserialize` so they can travel to and from the
//! Realtime Database unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the user identifier inside a [`ProfileRecord`].
pub const UID_FIELD: &str = "uid";
/// Field holding the day-keyed records inside a [`ProfileRecord`].
pub const DIAS_FIELD: &str = "dias";
/// Field holding the favorite card identifiers inside a [`ProfileRecord`].
pub const FAVORITES_FIELD: &str = "favorites";

/// Day-keyed records, stored opaquely.
pub type Dias = Map<String, Value>;

/// A user profile document, stored opaquely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRecord(Map<String, Value>);

impl ProfileRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user identifier, if the record carries a non-empty one.
    pub fn uid(&self) -> Option<&str> {
        self.0
            .get(UID_FIELD)
            .and_then(Value::as_str)
            .filter(|uid| !uid.is_empty())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Builder form of [`ProfileRecord::insert`].
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// The record's `dias` field, when it is an object.
    pub fn dias(&self) -> Option<&Dias> {
        self.0.get(DIAS_FIELD).and_then(Value::as_object)
    }

    /// The record's `favorites` field. Non-string entries are skipped.
    pub fn favorites(&self) -> Option<Vec<String>> {
        let list = self.0.get(FAVORITES_FIELD)?.as_array()?;
        Some(
            list.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    /// Name to greet the user with: `name`, then `email`, then `uid`.
    pub fn display_name(&self) -> Option<&str> {
        ["name", "email", UID_FIELD]
            .into_iter()
            .filter_map(|key| self.0.get(key).and_then(Value::as_str))
            .find(|value| !value.is_empty())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ProfileRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
