use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::persistence::Persistence;
use crate::session::Session;
use crate::store::SessionStorage;

/// Removes `id` unconditionally. Confirmation is the caller's job.
///
/// If `id` is being edited, the session returns to Idle before the record
/// goes away. A missing id is reported and nothing is persisted.
pub fn run<S: SessionStorage>(
    session: &mut Session,
    persistence: &mut Persistence<S>,
    id: u64,
) -> Result<CmdResult> {
    if session.records().find_by_id(id).is_none() {
        return Ok(CmdResult::default().reject_not_found(id));
    }

    if session.editing_id() == Some(id) {
        session.finish_edit();
    }
    let Some(employee) = session.records_mut().remove(id) else {
        return Ok(CmdResult::default().reject_not_found(id));
    };
    persistence.save(session.records().state())?;
    tracing::debug!(id, "employee deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee deleted ({}): {}",
        employee.id, employee.name
    )));
    Ok(result.with_affected_employees(vec![employee]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{edit, submit, Rejection};
    use crate::fixtures::valid_fields;
    use crate::persistence::STORAGE_KEY;
    use crate::session::Mode;
    use crate::store::memory::InMemoryStorage;

    fn seeded() -> (Session, Persistence<InMemoryStorage>) {
        let mut session = Session::default();
        let mut persistence = Persistence::new(InMemoryStorage::new());
        submit::run(&mut session, &mut persistence, &valid_fields("Alice")).unwrap();
        submit::run(&mut session, &mut persistence, &valid_fields("Bob")).unwrap();
        (session, persistence)
    }

    #[test]
    fn removes_and_persists() {
        let (mut session, mut persistence) = seeded();
        let result = run(&mut session, &mut persistence, 1).unwrap();

        assert_eq!(result.affected_employees[0].name, "Alice");
        assert!(session.records().find_by_id(1).is_none());
        let loaded = persistence.load();
        assert_eq!(loaded.employees.len(), 1);
        assert_eq!(loaded.employees[0].id, 2);
        assert_eq!(loaded.next_id, 3);
    }

    #[test]
    fn deleting_edited_record_returns_to_idle() {
        let (mut session, mut persistence) = seeded();
        edit::request(&mut session, 1);

        run(&mut session, &mut persistence, 1).unwrap();
        assert_eq!(session.editing_id(), None);
        assert_eq!(session.mode(), Mode::Adding);
        assert!(session.candidate().name.is_empty());
    }

    #[test]
    fn deleting_other_record_keeps_edit() {
        let (mut session, mut persistence) = seeded();
        edit::request(&mut session, 2);

        run(&mut session, &mut persistence, 1).unwrap();
        assert_eq!(session.editing_id(), Some(2));
        assert_eq!(session.candidate().name, "Bob");
    }

    #[test]
    fn missing_id_is_reported_and_not_persisted() {
        let (mut session, mut persistence) = seeded();
        let before = persistence.storage().get_item(STORAGE_KEY).unwrap();

        let result = run(&mut session, &mut persistence, 42).unwrap();
        assert_eq!(result.rejection, Some(Rejection::NotFound(42)));
        assert_eq!(session.records().len(), 2);

        let after = persistence.storage().get_item(STORAGE_KEY).unwrap();
        assert_eq!(before, after);
        assert_eq!(persistence.load(), *session.records().state());
    }
}
