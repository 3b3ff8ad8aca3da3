//! Live validation. Nothing here touches the session.

use crate::commands::CmdResult;
use crate::model::EmployeeFields;
use crate::validation::{self, Field};

pub fn field(field: Field, fields: &EmployeeFields) -> CmdResult {
    CmdResult::default().with_checked(vec![validation::validate_field(field, fields)])
}

pub fn all(fields: &EmployeeFields) -> CmdResult {
    CmdResult::default().with_checked(validation::validate_all(fields).results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::valid_fields;

    #[test]
    fn checks_one_field() {
        let mut fields = valid_fields("Al");
        fields.email = "bad".into();
        let result = field(Field::Email, &fields);
        assert_eq!(result.checked.len(), 1);
        assert_eq!(result.checked[0].message, "Please enter a valid email.");
        assert!(!result.is_rejected());
    }

    #[test]
    fn checks_all_fields_in_order() {
        let result = all(&valid_fields("Al"));
        let order: Vec<_> = result.checked.iter().map(|r| r.field).collect();
        assert_eq!(order, Field::ALL.to_vec());
        assert!(result.checked.iter().all(|r| r.valid));
    }
}
