use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::persistence::Persistence;
use crate::records::RecordStore;
use crate::session::Session;
use crate::store::SessionStorage;

/// Ends the session: drops the persisted slot and starts over empty.
pub fn run<S: SessionStorage>(
    session: &mut Session,
    persistence: &mut Persistence<S>,
) -> Result<CmdResult> {
    let removed = session.records().len();
    persistence.clear()?;
    *session = Session::new(RecordStore::new());
    tracing::debug!(removed, "session cleared");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Session cleared ({} employees removed)",
        removed
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::submit;
    use crate::fixtures::valid_fields;
    use crate::model::CollectionState;
    use crate::store::memory::InMemoryStorage;

    #[test]
    fn clears_records_and_ids() {
        let mut session = Session::default();
        let mut persistence = Persistence::new(InMemoryStorage::new());
        submit::run(&mut session, &mut persistence, &valid_fields("Alice")).unwrap();

        run(&mut session, &mut persistence).unwrap();
        assert!(session.records().is_empty());
        assert_eq!(session.records().next_id(), 1);
        assert_eq!(persistence.load(), CollectionState::default());
    }
}
