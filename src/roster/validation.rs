//! # Validation Rules
//!
//! One pure function per field. Each maps a candidate value to a
//! [`ValidationResult`]: pass, or fail with a structured [`Violation`] and a
//! human-readable message. Rules never look at the collection.
//!
//! Live per-field feedback ([`validate_field`]) and submit gating
//! ([`validate_all`], [`validate`]) run the exact same functions.
//!
//! | Field       | Checked in order                                  |
//! |-------------|---------------------------------------------------|
//! | name        | required, at least 2 characters                   |
//! | email       | required, `local@domain.tld` shape                |
//! | address     | required, at least 5 characters                   |
//! | phone       | required, at least 10 digits (separators ignored) |
//! | gender      | one of the enumerated values                      |
//! | hobbies     | at least one                                      |
//! | designation | required                                          |

use crate::model::{EmployeeFields, Gender, ValidEmployee};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

pub const NAME_MIN_CHARS: usize = 2;
pub const ADDRESS_MIN_CHARS: usize = 5;
pub const PHONE_MIN_DIGITS: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// The fields of a candidate record, in display and validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Address,
    Phone,
    Gender,
    Hobbies,
    Designation,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Address,
        Field::Phone,
        Field::Gender,
        Field::Hobbies,
        Field::Designation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Address => "address",
            Field::Phone => "phone",
            Field::Gender => "gender",
            Field::Hobbies => "hobbies",
            Field::Designation => "designation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown field: '{}'", s))
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    TooShort(usize),
    InvalidFormat,
    TooFewDigits(usize),
    AtLeastOneRequired,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "required"),
            Violation::TooShort(_) => write!(f, "too short"),
            Violation::InvalidFormat => write!(f, "invalid format"),
            Violation::TooFewDigits(_) => write!(f, "too few digits"),
            Violation::AtLeastOneRequired => write!(f, "at least one required"),
        }
    }
}

/// Outcome of one rule. `message` is empty iff `valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: Field,
    pub valid: bool,
    pub violation: Option<Violation>,
    pub message: String,
}

impl ValidationResult {
    fn pass(field: Field) -> Self {
        Self {
            field,
            valid: true,
            violation: None,
            message: String::new(),
        }
    }

    fn fail(field: Field, violation: Violation, message: impl Into<String>) -> Self {
        Self {
            field,
            valid: false,
            violation: Some(violation),
            message: message.into(),
        }
    }
}

/// Results of all seven rules, in [`Field::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.valid)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.valid)
    }

    pub fn get(&self, field: Field) -> Option<&ValidationResult> {
        self.results.iter().find(|r| r.field == field)
    }

    /// Message for a field, empty when it passed.
    pub fn message(&self, field: Field) -> &str {
        self.get(field).map(|r| r.message.as_str()).unwrap_or("")
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors().map(|r| r.message.as_str()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

pub fn validate_name(value: &str) -> ValidationResult {
    let v = value.trim();
    if v.is_empty() {
        return ValidationResult::fail(Field::Name, Violation::Required, "Name is required.");
    }
    if v.chars().count() < NAME_MIN_CHARS {
        return ValidationResult::fail(
            Field::Name,
            Violation::TooShort(NAME_MIN_CHARS),
            format!("Name must be at least {} characters.", NAME_MIN_CHARS),
        );
    }
    ValidationResult::pass(Field::Name)
}

pub fn validate_email(value: &str) -> ValidationResult {
    let v = value.trim();
    if v.is_empty() {
        return ValidationResult::fail(Field::Email, Violation::Required, "Email is required.");
    }
    if !EMAIL_RE.is_match(v) {
        return ValidationResult::fail(
            Field::Email,
            Violation::InvalidFormat,
            "Please enter a valid email.",
        );
    }
    ValidationResult::pass(Field::Email)
}

pub fn validate_address(value: &str) -> ValidationResult {
    let v = value.trim();
    if v.is_empty() {
        return ValidationResult::fail(
            Field::Address,
            Violation::Required,
            "Address is required.",
        );
    }
    if v.chars().count() < ADDRESS_MIN_CHARS {
        return ValidationResult::fail(
            Field::Address,
            Violation::TooShort(ADDRESS_MIN_CHARS),
            format!("Address must be at least {} characters.", ADDRESS_MIN_CHARS),
        );
    }
    ValidationResult::pass(Field::Address)
}

/// Separators are ignored, only digits count.
pub fn validate_phone(value: &str) -> ValidationResult {
    let v = value.trim();
    if v.is_empty() {
        return ValidationResult::fail(
            Field::Phone,
            Violation::Required,
            "Phone Number is required.",
        );
    }
    if v.chars().filter(|c| c.is_ascii_digit()).count() < PHONE_MIN_DIGITS {
        return ValidationResult::fail(
            Field::Phone,
            Violation::TooFewDigits(PHONE_MIN_DIGITS),
            format!("Phone must have at least {} digits.", PHONE_MIN_DIGITS),
        );
    }
    ValidationResult::pass(Field::Phone)
}

pub fn validate_gender(value: &str) -> ValidationResult {
    match Gender::from_str(value) {
        Ok(_) => ValidationResult::pass(Field::Gender),
        Err(_) => {
            ValidationResult::fail(Field::Gender, Violation::Required, "Gender is required.")
        }
    }
}

pub fn validate_hobbies(values: &[String]) -> ValidationResult {
    if normalize_hobbies(values).is_empty() {
        return ValidationResult::fail(
            Field::Hobbies,
            Violation::AtLeastOneRequired,
            "Select at least one hobby.",
        );
    }
    ValidationResult::pass(Field::Hobbies)
}

pub fn validate_designation(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::fail(
            Field::Designation,
            Violation::Required,
            "Designation is required.",
        );
    }
    ValidationResult::pass(Field::Designation)
}

/// Runs the rule for a single field of the candidate.
pub fn validate_field(field: Field, fields: &EmployeeFields) -> ValidationResult {
    match field {
        Field::Name => validate_name(&fields.name),
        Field::Email => validate_email(&fields.email),
        Field::Address => validate_address(&fields.address),
        Field::Phone => validate_phone(&fields.phone),
        Field::Gender => validate_gender(&fields.gender),
        Field::Hobbies => validate_hobbies(&fields.hobbies),
        Field::Designation => validate_designation(&fields.designation),
    }
}

pub fn validate_all(fields: &EmployeeFields) -> ValidationReport {
    ValidationReport {
        results: Field::ALL
            .iter()
            .map(|&field| validate_field(field, fields))
            .collect(),
    }
}

/// Whether a submit would currently be accepted.
pub fn is_submittable(fields: &EmployeeFields) -> bool {
    Field::ALL
        .iter()
        .all(|&field| validate_field(field, fields).valid)
}

/// Validates the whole candidate and, on success, returns its normalized form.
pub fn validate(fields: &EmployeeFields) -> Result<ValidEmployee, ValidationReport> {
    let report = validate_all(fields);
    if !report.is_valid() {
        return Err(report);
    }

    let gender = Gender::from_str(&fields.gender).map_err(|_| report.clone())?;
    Ok(ValidEmployee {
        name: fields.name.trim().to_string(),
        email: fields.email.trim().to_string(),
        address: fields.address.trim().to_string(),
        phone: fields.phone.trim().to_string(),
        gender,
        hobbies: normalize_hobbies(&fields.hobbies),
        designation: fields.designation.trim().to_string(),
    })
}

/// Trims hobbies, drops blanks and repeats. First occurrence keeps its place.
pub fn normalize_hobbies(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let v = value.trim();
        if !v.is_empty() && !out.iter().any(|h| h == v) {
            out.push(v.to_string());
        }
    }
    out
}
