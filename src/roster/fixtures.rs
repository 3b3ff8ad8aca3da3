//! Sample candidates and records for tests.

use crate::model::{EmployeeFields, ValidEmployee};
use crate::validation;

/// A candidate that passes every rule, with the given name.
pub fn valid_fields(name: &str) -> EmployeeFields {
    EmployeeFields {
        name: name.to_string(),
        email: "a@b.co".to_string(),
        address: "12345".to_string(),
        phone: "5551234567".to_string(),
        gender: "M".to_string(),
        hobbies: vec!["reading".to_string()],
        designation: "Eng".to_string(),
    }
}

pub fn valid_employee(name: &str) -> ValidEmployee {
    validation::validate(&valid_fields(name)).expect("fixture fields are valid")
}
