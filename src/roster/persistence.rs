//! # Persistence Gateway
//!
//! Serializes the [`CollectionState`] to a single fixed slot of a
//! [`SessionStorage`] and reads it back.
//!
//! Payload layout:
//!
//! ```json
//! { "employees": [ { "id": 1, "name": "...", ... } ], "nextId": 2 }
//! ```
//!
//! Loading never fails: an absent, unreadable, unparseable, or inconsistent
//! payload yields the empty default state and a warning in the log.

use crate::error::Result;
use crate::model::CollectionState;
use crate::records::has_valid_ids;
use crate::store::SessionStorage;
use crate::validation;

pub const STORAGE_KEY: &str = "employee-management-data";

pub struct Persistence<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> Persistence<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn save(&mut self, state: &CollectionState) -> Result<()> {
        let payload = serde_json::to_string(state)?;
        self.storage.set_item(STORAGE_KEY, &payload)?;
        tracing::debug!(
            employees = state.employees.len(),
            next_id = state.next_id,
            "saved collection state"
        );
        Ok(())
    }

    pub fn load(&self) -> CollectionState {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no stored state, starting empty");
                return CollectionState::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored state unreadable, starting empty");
                return CollectionState::default();
            }
        };

        let state: CollectionState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "stored state does not parse, starting empty");
                return CollectionState::default();
            }
        };

        if !has_valid_ids(&state) {
            tracing::warn!("stored state has unusable ids, starting empty");
            return CollectionState::default();
        }
        if let Some(bad) = state
            .employees
            .iter()
            .find(|e| !validation::is_submittable(&e.to_fields()))
        {
            tracing::warn!(id = bad.id, "stored record fails validation, starting empty");
            return CollectionState::default();
        }

        tracing::debug!(employees = state.employees.len(), "loaded collection state");
        state
    }

    /// Drops the persisted slot; the next load starts empty.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove_item(STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::valid_employee;
    use crate::records::RecordStore;
    use crate::store::memory::InMemoryStorage;

    fn populated_state() -> CollectionState {
        let mut store = RecordStore::new();
        store.insert(valid_employee("Alice")).unwrap();
        store.insert(valid_employee("Bob")).unwrap();
        store.remove(1);
        store.state().clone()
    }

    #[test]
    fn absent_slot_loads_default() {
        let persistence = Persistence::new(InMemoryStorage::new());
        assert_eq!(persistence.load(), CollectionState::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let state = populated_state();
        let mut persistence = Persistence::new(InMemoryStorage::new());
        persistence.save(&state).unwrap();

        let loaded = persistence.load();
        assert_eq!(loaded, state);
        assert_eq!(loaded.next_id, 3);
    }

    #[test]
    fn payload_uses_employees_and_next_id_keys() {
        let mut persistence = Persistence::new(InMemoryStorage::new());
        persistence.save(&populated_state()).unwrap();

        let raw = persistence.storage().get_item(STORAGE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["nextId"], 3);
        assert_eq!(json["employees"][0]["id"], 2);
        assert_eq!(json["employees"][0]["name"], "Bob");
        assert_eq!(json["employees"][0]["gender"], "Male");
    }

    #[test]
    fn corrupt_payload_loads_default() {
        let storage = InMemoryStorage::new().with_item(STORAGE_KEY, "{not json");
        assert_eq!(Persistence::new(storage).load(), CollectionState::default());
    }

    #[test]
    fn partial_payload_fills_defaults() {
        let storage = InMemoryStorage::new().with_item(STORAGE_KEY, r#"{"employees": []}"#);
        assert_eq!(Persistence::new(storage).load(), CollectionState::default());
    }

    #[test]
    fn duplicate_ids_load_default() {
        let mut state = populated_state();
        let dup = state.employees[0].clone();
        state.employees.push(dup);
        let storage = InMemoryStorage::new()
            .with_item(STORAGE_KEY, &serde_json::to_string(&state).unwrap());
        assert_eq!(Persistence::new(storage).load(), CollectionState::default());
    }

    #[test]
    fn max_record_id_loads_default() {
        let mut state = populated_state();
        state.employees[0].id = u64::MAX;
        let storage = InMemoryStorage::new()
            .with_item(STORAGE_KEY, &serde_json::to_string(&state).unwrap());
        assert_eq!(Persistence::new(storage).load(), CollectionState::default());
    }

    #[test]
    fn max_next_id_loads_default() {
        let raw = format!(r#"{{"employees":[],"nextId":{}}}"#, u64::MAX);
        let storage = InMemoryStorage::new().with_item(STORAGE_KEY, &raw);
        assert_eq!(Persistence::new(storage).load(), CollectionState::default());
    }

    #[test]
    fn invalid_record_loads_default() {
        let mut state = populated_state();
        state.employees[0].email = "not-an-email".into();
        let storage = InMemoryStorage::new()
            .with_item(STORAGE_KEY, &serde_json::to_string(&state).unwrap());
        assert_eq!(Persistence::new(storage).load(), CollectionState::default());
    }

    #[test]
    fn accepts_short_gender_codes() {
        let raw = r#"{"employees":[{"id":1,"name":"Al","email":"a@b.co","address":"12345",
            "phone":"5551234567","gender":"M","hobbies":["reading"],"designation":"Eng"}],
            "nextId":2}"#;
        let storage = InMemoryStorage::new().with_item(STORAGE_KEY, raw);
        let state = Persistence::new(storage).load();
        assert_eq!(state.employees.len(), 1);
        assert_eq!(state.employees[0].gender, crate::model::Gender::Male);
    }

    #[test]
    fn clear_removes_slot() {
        let mut persistence = Persistence::new(InMemoryStorage::new());
        persistence.save(&populated_state()).unwrap();
        persistence.clear().unwrap();
        assert!(persistence.storage().is_empty());
        assert_eq!(persistence.load(), CollectionState::default());
    }
}
