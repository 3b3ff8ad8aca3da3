//! # API Facade
//!
//! The single entry point for any presentation layer. It owns the session
//! state and the persistence gateway, dispatches each intent to its command
//! module, and returns structured [`CmdResult`]s. No business logic lives
//! here.
//!
//! `RosterApi<S: SessionStorage>` is generic over the slot backend:
//! - Production: `RosterApi<FileStorage>`
//! - Testing: `RosterApi<InMemoryStorage>`
//!
//! Stored state is loaded exactly once, in [`RosterApi::new`], before any
//! mutation is possible.

use crate::commands;
use crate::error::Result;
use crate::model::{Employee, EmployeeFields};
use crate::persistence::Persistence;
use crate::records::RecordStore;
use crate::session::{Mode, Session};
use crate::store::SessionStorage;
use crate::validation::Field;

pub struct RosterApi<S: SessionStorage> {
    session: Session,
    persistence: Persistence<S>,
}

impl<S: SessionStorage> RosterApi<S> {
    pub fn new(storage: S) -> Self {
        let persistence = Persistence::new(storage);
        let records = RecordStore::from_state(persistence.load());
        Self {
            session: Session::new(records),
            persistence,
        }
    }

    pub fn submit(&mut self, fields: &EmployeeFields) -> Result<CmdResult> {
        commands::submit::run(&mut self.session, &mut self.persistence, fields)
    }

    pub fn edit_request(&mut self, id: u64) -> CmdResult {
        commands::edit::request(&mut self.session, id)
    }

    pub fn cancel_edit(&mut self) -> CmdResult {
        commands::edit::cancel(&mut self.session)
    }

    pub fn reset(&mut self) -> CmdResult {
        commands::edit::cancel(&mut self.session)
    }

    pub fn delete(&mut self, id: u64) -> Result<CmdResult> {
        commands::delete::run(&mut self.session, &mut self.persistence, id)
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.session)
    }

    pub fn show(&self, id: u64) -> CmdResult {
        commands::list::show(&self.session, id)
    }

    pub fn check_field(&self, field: Field, fields: &EmployeeFields) -> CmdResult {
        commands::check::field(field, fields)
    }

    pub fn check_all(&self, fields: &EmployeeFields) -> CmdResult {
        commands::check::all(fields)
    }

    pub fn clear_session(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.session, &mut self.persistence)
    }

    pub fn records(&self) -> &[Employee] {
        self.session.records().all_records()
    }

    pub fn next_id(&self) -> u64 {
        self.session.records().next_id()
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn editing_id(&self) -> Option<u64> {
        self.session.editing_id()
    }

    pub fn candidate(&self) -> &EmployeeFields {
        self.session.candidate()
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Rejection};
pub use crate::session::Mode as FormMode;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::valid_fields;
    use crate::persistence::STORAGE_KEY;
    use crate::store::memory::InMemoryStorage;
    use crate::validation::Violation;

    fn api() -> RosterApi<InMemoryStorage> {
        RosterApi::new(InMemoryStorage::new())
    }

    #[test]
    fn walkthrough_scenario() {
        let mut api = api();

        let first = api.submit(&valid_fields("Al")).unwrap();
        assert_eq!(first.affected_employees[0].id, 1);

        let second = api.submit(&valid_fields("Bea")).unwrap();
        assert_eq!(second.affected_employees[0].id, 2);
        assert_eq!(api.next_id(), 3);

        api.edit_request(1);
        let mut short = api.candidate().clone();
        short.name = "A".into();
        let rejected = api.submit(&short).unwrap();
        let Some(Rejection::Invalid(report)) = rejected.rejection else {
            panic!("expected validation failure");
        };
        assert_eq!(
            report.get(Field::Name).unwrap().violation,
            Some(Violation::TooShort(2))
        );
        assert_eq!(api.records()[0].name, "Al");

        api.delete(1).unwrap();
        assert_eq!(api.editing_id(), None);
        assert_eq!(api.records().len(), 1);
        assert_eq!(api.records()[0].id, 2);
    }

    #[test]
    fn loads_existing_state_once_at_startup() {
        let mut first = api();
        first.submit(&valid_fields("Alice")).unwrap();
        first.submit(&valid_fields("Bob")).unwrap();
        first.delete(2).unwrap();

        let storage = first.storage().clone();
        let mut second = RosterApi::new(storage);
        assert_eq!(second.records().len(), 1);
        assert_eq!(second.next_id(), 3);

        let added = second.submit(&valid_fields("Carol")).unwrap();
        assert_eq!(added.affected_employees[0].id, 3);
    }

    #[test]
    fn corrupt_storage_starts_empty() {
        let storage = InMemoryStorage::new().with_item(STORAGE_KEY, "[1, 2");
        let api = RosterApi::new(storage);
        assert!(api.records().is_empty());
        assert_eq!(api.next_id(), 1);
    }

    #[test]
    fn exhausted_ids_in_storage_start_empty() {
        let max_id = format!(
            r#"{{"employees":[{{"id":{},"name":"Al","email":"a@b.co","address":"12345",
            "phone":"5551234567","gender":"M","hobbies":["reading"],"designation":"Eng"}}],
            "nextId":2}}"#,
            u64::MAX
        );
        let max_next = format!(r#"{{"employees":[],"nextId":{}}}"#, u64::MAX);

        for raw in [max_id, max_next] {
            let mut api = RosterApi::new(InMemoryStorage::new().with_item(STORAGE_KEY, &raw));
            assert!(api.records().is_empty());
            assert_eq!(api.next_id(), 1);

            let added = api.submit(&valid_fields("Al")).unwrap();
            assert_eq!(added.affected_employees[0].id, 1);
        }
    }

    #[test]
    fn missing_delete_leaves_payload_unchanged() {
        let mut api = api();
        api.submit(&valid_fields("Alice")).unwrap();
        let before = api.storage().get_item(STORAGE_KEY).unwrap();

        let result = api.delete(7).unwrap();
        assert_eq!(result.rejection, Some(Rejection::NotFound(7)));
        assert_eq!(api.storage().get_item(STORAGE_KEY).unwrap(), before);
    }

    #[test]
    fn reset_and_mode_labels() {
        let mut api = api();
        api.submit(&valid_fields("Alice")).unwrap();
        api.edit_request(1);
        assert_eq!(api.mode(), FormMode::Editing(1));
        assert_eq!(api.mode().title(), "Edit Employee");

        api.reset();
        assert_eq!(api.mode(), FormMode::Adding);
        assert_eq!(api.mode().submit_label(), "Submit");
    }

    #[test]
    fn check_dispatches_without_mutation() {
        let api = api();
        let result = api.check_field(Field::Designation, &EmployeeFields::default());
        assert_eq!(result.checked[0].message, "Designation is required.");
        assert_eq!(api.check_all(&EmployeeFields::default()).checked.len(), 7);
        assert!(api.storage().is_empty());
    }
}
