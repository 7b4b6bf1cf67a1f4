//! Field rules for requesters and collaborators.
//!
//! Everything here is a pure function of its input. Patterns are compiled once
//! and never mutated.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::record::{Collaborator, CollaboratorField, FieldKind};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));
static ALPHABETIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zÁÉÍÓÚÜáéíóúüÑñ\s]+$").expect("invalid alphabetic pattern")
});
static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("invalid alphanumeric pattern"));
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("invalid numeric pattern"));
static NATIONAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-.]+$").expect("invalid national id pattern"));
static PASSPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-]+$").expect("invalid passport pattern"));

pub const TAG_LEN: usize = 13;
const ALPHA_MAX_CHARS: usize = 50;

pub const INVALID_EMAIL: &str = "Enter a valid email address.";
const TAG_ERROR: &str = "Must be 13 alphanumeric characters.";
const ALPHA_ERROR: &str = "Letters only (max. 50).";
const NATIONAL_ID_ERROR: &str = "Up to 12 characters (alphanumeric, may include '-' and '.').";
const PASSPORT_ERROR: &str = "Up to 50 alphanumeric characters.";
const SAP_ERROR: &str = "Digits only (max. 10).";
const CONTRACT_ERROR: &str = "Digits only (max. 12).";

/// Outcome of checking one collaborator: the message for every failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CollaboratorValidation {
    pub errors: BTreeMap<CollaboratorField, &'static str>,
}

impl CollaboratorValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: CollaboratorField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn validate_collaborator(collaborator: &Collaborator) -> CollaboratorValidation {
    let errors = CollaboratorField::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, collaborator.value(field))
                .err()
                .map(|message| (field, message))
        })
        .collect();
    CollaboratorValidation { errors }
}

/// Checks a single stored value. Blank optional fields always pass.
pub fn validate_field(field: CollaboratorField, value: &str) -> Result<(), &'static str> {
    if value.is_empty() && !field.is_required() {
        return Ok(());
    }

    let ok = match field.kind() {
        FieldKind::Tag => value.chars().count() == TAG_LEN && ALPHANUMERIC.is_match(value),
        FieldKind::Alphabetic => {
            let trimmed = value.trim();
            let len = trimmed.chars().count();
            len > 0 && len <= ALPHA_MAX_CHARS && ALPHABETIC.is_match(trimmed)
        }
        FieldKind::Numeric => {
            value.chars().count() <= field.max_chars() && NUMERIC.is_match(value)
        }
        FieldKind::NationalId => {
            value.chars().count() <= field.max_chars() && NATIONAL_ID.is_match(value)
        }
        FieldKind::Passport => {
            value.chars().count() <= field.max_chars() && PASSPORT.is_match(value)
        }
    };

    if ok {
        Ok(())
    } else {
        Err(error_message(field))
    }
}

pub fn error_message(field: CollaboratorField) -> &'static str {
    match field {
        CollaboratorField::Tag => TAG_ERROR,
        CollaboratorField::NationalId => NATIONAL_ID_ERROR,
        CollaboratorField::Passport => PASSPORT_ERROR,
        CollaboratorField::SapCode => SAP_ERROR,
        CollaboratorField::ContractNumber => CONTRACT_ERROR,
        _ => ALPHA_ERROR,
    }
}

/// Shapes raw input before it is stored.
///
/// Tags are upper-cased, numeric fields drop every non-digit, and every field
/// is cut to its character cap.
pub fn transform_input(field: CollaboratorField, raw: &str) -> String {
    let max = field.max_chars();
    match field.kind() {
        FieldKind::Tag => raw.to_uppercase().chars().take(max).collect(),
        FieldKind::Numeric => raw.chars().filter(char::is_ascii_digit).take(max).collect(),
        _ => raw.chars().take(max).collect(),
    }
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
