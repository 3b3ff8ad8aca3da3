//! Engine state for one session: the record store, the editing pointer, and
//! the editable candidate.
//!
//! The editing pointer is either absent (Idle) or names exactly one stored
//! record. Commands move it only through [`Session::begin_edit`] and
//! [`Session::finish_edit`].

use crate::model::{Employee, EmployeeFields};
use crate::records::RecordStore;

/// What a submit will do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Adding,
    Editing(u64),
}

impl Mode {
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Adding => "Add Employee",
            Mode::Editing(_) => "Edit Employee",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Mode::Adding => "Submit",
            Mode::Editing(_) => "Update",
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    records: RecordStore,
    editing_id: Option<u64>,
    candidate: EmployeeFields,
}

impl Session {
    pub fn new(records: RecordStore) -> Self {
        Self {
            records,
            editing_id: None,
            candidate: EmployeeFields::default(),
        }
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut RecordStore {
        &mut self.records
    }

    pub fn editing_id(&self) -> Option<u64> {
        self.editing_id
    }

    pub fn mode(&self) -> Mode {
        match self.editing_id {
            Some(id) => Mode::Editing(id),
            None => Mode::Adding,
        }
    }

    /// The values currently in the form: seeded on edit, kept after a
    /// rejected submit, cleared when returning to Idle.
    pub fn candidate(&self) -> &EmployeeFields {
        &self.candidate
    }

    pub(crate) fn set_candidate(&mut self, fields: EmployeeFields) {
        self.candidate = fields;
    }

    /// Points the editor at `employee`, discarding any unsaved candidate.
    pub(crate) fn begin_edit(&mut self, employee: &Employee) {
        self.editing_id = Some(employee.id);
        self.candidate = employee.to_fields();
    }

    /// Back to Idle. Returns the id that was being edited, if any.
    pub(crate) fn finish_edit(&mut self) -> Option<u64> {
        self.candidate = EmployeeFields::default();
        self.editing_id.take()
    }
}
