//! # CRUD Engine
//!
//! One module per user intent. Every command takes the [`Session`](crate::session::Session)
//! explicitly and, when it mutates, the [`Persistence`](crate::persistence::Persistence)
//! gateway. State is saved once, after a mutation succeeds, and never on a
//! rejected intent.
//!
//! Recoverable outcomes (validation failures, missing targets) come back as a
//! [`Rejection`] inside an `Ok(CmdResult)`. `Err` is reserved for storage
//! write failures.

use crate::model::Employee;
use crate::validation::{ValidationReport, ValidationResult};

pub mod check;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod list;
pub mod submit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Why an intent was turned down without touching the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Invalid(ValidationReport),
    NotFound(u64),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_employees: Vec<Employee>,
    pub listed_employees: Vec<Employee>,
    pub checked: Vec<ValidationResult>,
    pub rejection: Option<Rejection>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_employees(mut self, employees: Vec<Employee>) -> Self {
        self.affected_employees = employees;
        self
    }

    pub fn with_listed_employees(mut self, employees: Vec<Employee>) -> Self {
        self.listed_employees = employees;
        self
    }

    pub fn with_checked(mut self, checked: Vec<ValidationResult>) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    pub(crate) fn reject_not_found(mut self, id: u64) -> Self {
        self.add_message(CmdMessage::error(format!("Employee {} not found", id)));
        self.rejection = Some(Rejection::NotFound(id));
        self
    }

    pub(crate) fn reject_invalid(mut self, report: ValidationReport) -> Self {
        for error in report.errors() {
            self.add_message(CmdMessage::error(format!(
                "{}: {}",
                error.field, error.message
            )));
        }
        self.rejection = Some(Rejection::Invalid(report));
        self
    }
}
