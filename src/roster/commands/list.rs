use crate::commands::CmdResult;
use crate::session::Session;

pub fn run(session: &Session) -> CmdResult {
    CmdResult::default().with_listed_employees(session.records().all_records().to_vec())
}

pub fn show(session: &Session, id: u64) -> CmdResult {
    match session.records().find_by_id(id) {
        Some(employee) => CmdResult::default().with_listed_employees(vec![employee.clone()]),
        None => CmdResult::default().reject_not_found(id),
    }
}
