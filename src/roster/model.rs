use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of gender values a record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(alias = "M", alias = "male")]
    Male,
    #[serde(alias = "F", alias = "female")]
    Female,
    #[serde(alias = "O", alias = "other")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            "o" | "other" => Ok(Gender::Other),
            other => Err(format!("Unknown gender: '{}'", other)),
        }
    }
}

/// Raw candidate values as supplied by a presentation layer.
///
/// Nothing here is trusted: every value goes through [`crate::validation`]
/// before it can reach the record store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    /// Empty means "nothing selected".
    pub gender: String,
    pub hobbies: Vec<String>,
    pub designation: String,
}

/// A stored employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub gender: Gender,
    pub hobbies: Vec<String>,
    pub designation: String,
}

impl Employee {
    /// Seeds an editable candidate from this record's values.
    pub fn to_fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            gender: self.gender.as_str().to_string(),
            hobbies: self.hobbies.clone(),
            designation: self.designation.clone(),
        }
    }

    pub(crate) fn from_valid(id: u64, valid: ValidEmployee) -> Self {
        Self {
            id,
            name: valid.name,
            email: valid.email,
            address: valid.address,
            phone: valid.phone,
            gender: valid.gender,
            hobbies: valid.hobbies,
            designation: valid.designation,
        }
    }

    pub(crate) fn apply(&mut self, valid: ValidEmployee) {
        self.name = valid.name;
        self.email = valid.email;
        self.address = valid.address;
        self.phone = valid.phone;
        self.gender = valid.gender;
        self.hobbies = valid.hobbies;
        self.designation = valid.designation;
    }
}

/// Normalized field values that passed every validation rule.
///
/// Only [`crate::validation::validate`] produces these, so the record store
/// never sees unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmployee {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) address: String,
    pub(crate) phone: String,
    pub(crate) gender: Gender,
    pub(crate) hobbies: Vec<String>,
    pub(crate) designation: String,
}

impl ValidEmployee {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The persisted snapshot: every record plus the next id to hand out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionState {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(rename = "nextId", default = "default_next_id")]
    pub next_id: u64,
}

fn default_next_id() -> u64 {
    1
}

impl Default for CollectionState {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            next_id: default_next_id(),
        }
    }
}
