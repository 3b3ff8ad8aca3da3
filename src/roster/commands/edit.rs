use crate::commands::{CmdMessage, CmdResult};
use crate::session::Session;

/// Enters Editing(id) if the record still exists, seeding the candidate with
/// its values. Any unsaved candidate for a previous target is discarded.
pub fn request(session: &mut Session, id: u64) -> CmdResult {
    let Some(employee) = session.records().find_by_id(id).cloned() else {
        return CmdResult::default().reject_not_found(id);
    };

    let mut result = CmdResult::default();
    if let Some(previous) = session.editing_id().filter(|prev| *prev != id) {
        tracing::debug!(previous, id, "switching edit target, discarding candidate");
        let unsaved = session
            .records()
            .find_by_id(previous)
            .is_some_and(|e| e.to_fields() != *session.candidate());
        if unsaved {
            result.add_message(CmdMessage::warning(format!(
                "Unsaved changes to employee {} discarded",
                previous
            )));
        }
    }
    session.begin_edit(&employee);

    result.add_message(CmdMessage::info(format!(
        "Editing employee ({}): {}",
        employee.id, employee.name
    )));
    result.with_affected_employees(vec![employee])
}

/// Back to Idle without touching the collection. Also serves the reset intent.
pub fn cancel(session: &mut Session) -> CmdResult {
    let mut result = CmdResult::default();
    if let Some(id) = session.finish_edit() {
        result.add_message(CmdMessage::info(format!("Edit of employee {} cancelled", id)));
    }
    result
}
