use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeFields;
use crate::persistence::Persistence;
use crate::session::Session;
use crate::store::SessionStorage;
use crate::validation;

/// Inserts when Idle, replaces the edited record when Editing.
///
/// A rejected candidate stays in the session so the form keeps its values;
/// the editing pointer is left where it was.
pub fn run<S: SessionStorage>(
    session: &mut Session,
    persistence: &mut Persistence<S>,
    fields: &EmployeeFields,
) -> Result<CmdResult> {
    let result = CmdResult::default();

    let valid = match validation::validate(fields) {
        Ok(valid) => valid,
        Err(report) => {
            tracing::debug!(errors = report.errors().count(), "submit rejected");
            session.set_candidate(fields.clone());
            return Ok(result.reject_invalid(report));
        }
    };

    let Some(id) = session.editing_id() else {
        let employee = session.records_mut().insert(valid)?;
        persistence.save(session.records().state())?;
        session.finish_edit();
        tracing::debug!(id = employee.id, "employee added");

        let mut result = result.with_affected_employees(vec![employee.clone()]);
        result.add_message(CmdMessage::success(format!(
            "Employee added ({}): {}",
            employee.id, employee.name
        )));
        return Ok(result);
    };

    let Some(employee) = session.records_mut().replace(id, valid) else {
        session.finish_edit();
        return Ok(result.reject_not_found(id));
    };
    persistence.save(session.records().state())?;
    session.finish_edit();
    tracing::debug!(id, "employee updated");

    let mut result = result.with_affected_employees(vec![employee.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Employee updated ({}): {}",
        employee.id, employee.name
    )));
    Ok(result)
}
