//! # Session state
//!
//! [`SessionStore`] is the in-memory record of who is signed in and what their
//! profile looks like. It starts empty, is populated wholesale by the login
//! flow, has its sub-fields updated independently afterwards, and is reset on
//! logout.
//!
//! Authentication is never stored as a flag. [`is_authenticated`] derives it
//! from the profile record every time it is asked, and every caller goes
//! through that one function.
//!
//! All operations are total: whatever shape is handed in is stored as given.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Dias, ProfileRecord, DIAS_FIELD};

/// True iff `record` exists and carries a non-empty `uid`.
pub fn is_authenticated(record: Option<&ProfileRecord>) -> bool {
    record.and_then(ProfileRecord::uid).is_some()
}

/// The current user's session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStore {
    /// Full profile document; `None` means nobody is signed in.
    pub full_user_data: Option<ProfileRecord>,
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub dias: Dias,
    /// Profile of another user being looked at by a monitor/admin.
    pub monitored_user_data: Option<ProfileRecord>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole profile record.
    pub fn set_user_data(&mut self, data: ProfileRecord) {
        self.full_user_data = Some(data);
    }

    pub fn set_dias(&mut self, dias: Dias) {
        self.dias = dias;
    }

    pub fn set_favorites(&mut self, favorites: Vec<String>) {
        self.favorites = favorites;
    }

    pub fn set_monitored_user_data(&mut self, data: Option<ProfileRecord>) {
        self.monitored_user_data = data;
    }

    /// Write `dias` into the profile record, keeping every other field.
    /// Without a record, starts a new one holding only `dias`.
    pub fn update_dias_in_user_data(&mut self, dias: Dias) {
        let dias = Value::Object(dias);
        match self.full_user_data.as_mut() {
            Some(record) => {
                record.insert(DIAS_FIELD, dias);
            }
            None => {
                self.full_user_data = Some(ProfileRecord::new().with(DIAS_FIELD, dias));
            }
        }
    }

    /// Favorite card identifiers; empty while no profile is loaded.
    pub fn favorite_cards(&self) -> &[String] {
        match self.full_user_data {
            Some(_) => &self.favorites,
            None => &[],
        }
    }

    /// Favorites with `card` appended, or `None` when the trimmed name is
    /// empty or already a favorite.
    pub fn favorites_adding(&self, card: &str) -> Option<Vec<String>> {
        let card = card.trim();
        let current = self.favorite_cards();
        if card.is_empty() || current.iter().any(|c| c == card) {
            return None;
        }
        let mut next = current.to_vec();
        next.push(card.to_string());
        Some(next)
    }

    /// Favorites without `card`.
    pub fn favorites_removing(&self, card: &str) -> Vec<String> {
        self.favorite_cards()
            .iter()
            .filter(|c| *c != card)
            .cloned()
            .collect()
    }

    pub fn is_authenticated(&self) -> bool {
        is_authenticated(self.full_user_data.as_ref())
    }

    /// The signed-in user's identifier.
    pub fn uid(&self) -> Option<&str> {
        self.full_user_data.as_ref().and_then(ProfileRecord::uid)
    }

    /// Populate the session from a freshly loaded profile.
    ///
    /// The record is stored wholesale; its `favorites` and `dias` fields, when
    /// present, also seed the standalone fields.
    pub fn hydrate(&mut self, record: ProfileRecord) {
        if let Some(favorites) = record.favorites() {
            self.set_favorites(favorites);
        }
        if let Some(dias) = record.dias() {
            self.set_dias(dias.clone());
        }
        tracing::info!(uid = record.uid().unwrap_or_default(), "session hydrated");
        self.set_user_data(record);
    }

    /// Forget everything (logout).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ProfileRecord {
        serde_json::from_value(value).unwrap()
    }

    fn dias(value: Value) -> Dias {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_authentication_follows_uid() {
        assert!(is_authenticated(Some(&record(json!({"uid": "u1"})))));
        assert!(is_authenticated(Some(&record(json!({"uid": "u1", "name": "Ana"})))));
        assert!(!is_authenticated(None));
        assert!(!is_authenticated(Some(&record(json!({"name": "Ana"})))));
        assert!(!is_authenticated(Some(&record(json!({"uid": ""})))));
    }

    #[test]
    fn test_set_user_data_flips_authentication() {
        let mut session = SessionStore::new();
        assert!(!session.is_authenticated());

        session.set_user_data(record(json!({"uid": "u1"})));
        assert!(session.is_authenticated());
        assert_eq!(session.uid(), Some("u1"));
    }

    #[test]
    fn test_set_user_data_is_idempotent() {
        let r = record(json!({"uid": "u1", "dias": {"lunes": 1}}));

        let mut once = SessionStore::new();
        once.set_user_data(r.clone());

        let mut twice = SessionStore::new();
        twice.set_user_data(r.clone());
        twice.set_user_data(r);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_partial_setters_leave_other_fields() {
        let mut session = SessionStore::new();
        session.set_user_data(record(json!({"uid": "u1"})));
        session.set_favorites(vec!["a".into()]);

        session.set_dias(dias(json!({"x": 1})));
        assert_eq!(session.favorites, vec!["a".to_string()]);
        assert_eq!(session.full_user_data, Some(record(json!({"uid": "u1"}))));

        session.set_monitored_user_data(Some(record(json!({"uid": "other"}))));
        assert_eq!(session.dias, dias(json!({"x": 1})));
        assert_eq!(session.uid(), Some("u1"));
    }

    #[test]
    fn test_favorite_cards_empty_without_profile() {
        let mut session = SessionStore::new();
        assert!(session.favorite_cards().is_empty());

        session.set_favorites(vec!["a".into()]);
        assert!(session.favorite_cards().is_empty());

        session.set_user_data(record(json!({"uid": "u1"})));
        assert_eq!(session.favorite_cards(), ["a".to_string()]);

        session.set_favorites(vec!["b".into(), "c".into()]);
        assert_eq!(session.favorite_cards(), ["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_favorites_adding_and_removing() {
        let mut session = SessionStore::new();
        session.set_user_data(record(json!({"uid": "u1"})));
        session.set_favorites(vec!["a".into()]);

        let added = session.favorites_adding("  b ").unwrap();
        assert_eq!(added, ["a".to_string(), "b".to_string()]);
        assert_eq!(session.favorites_adding("a"), None);
        assert_eq!(session.favorites_adding("   "), None);

        session.set_favorites(added);
        assert_eq!(session.favorites_removing("a"), ["b".to_string()]);
        assert_eq!(session.favorites_removing("zzz").len(), 2);
    }

    #[test]
    fn test_update_dias_merges_into_existing_record() {
        let mut session = SessionStore::new();
        session.set_user_data(record(json!({"a": 1, "dias": {}})));

        session.update_dias_in_user_data(dias(json!({"x": 1})));

        assert_eq!(
            session.full_user_data,
            Some(record(json!({"a": 1, "dias": {"x": 1}})))
        );
        assert!(session.dias.is_empty());
    }

    #[test]
    fn test_update_dias_creates_record_when_missing() {
        let mut session = SessionStore::new();
        session.update_dias_in_user_data(dias(json!({"x": 1})));

        assert_eq!(session.full_user_data, Some(record(json!({"dias": {"x": 1}}))));
        // a record without uid is still not a login
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_hydrate_seeds_sub_fields() {
        let mut session = SessionStore::new();
        session.hydrate(record(json!({
            "uid": "u1",
            "favorites": ["card-1"],
            "dias": {"2024-05-01": {"done": true}}
        })));

        assert!(session.is_authenticated());
        assert_eq!(session.favorite_cards(), ["card-1".to_string()]);
        assert_eq!(session.dias, dias(json!({"2024-05-01": {"done": true}})));
    }

    #[test]
    fn test_reset_logs_out() {
        let mut session = SessionStore::new();
        session.hydrate(record(json!({"uid": "u1", "favorites": ["a"]})));
        session.set_monitored_user_data(Some(record(json!({"uid": "u2"}))));

        session.reset();

        assert_eq!(session, SessionStore::default());
        assert!(!session.is_authenticated());
    }
}
