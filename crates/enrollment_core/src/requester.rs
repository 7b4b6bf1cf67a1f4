use serde::{Deserialize, Serialize};

use crate::validation::{is_present, is_valid_email, INVALID_EMAIL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequesterField {
    Name,
    Company,
    Email,
}

/// The person asking for the enrollment. Not enrolled themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequesterValidity {
    pub name_ok: bool,
    pub company_ok: bool,
    pub email_ok: bool,
}

impl RequesterValidity {
    pub fn all(&self) -> bool {
        self.name_ok && self.company_ok && self.email_ok
    }
}

impl Requester {
    pub fn set(&mut self, field: RequesterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RequesterField::Name => self.name = value,
            RequesterField::Company => self.company = value,
            RequesterField::Email => self.email = value,
        }
    }

    pub fn validity(&self) -> RequesterValidity {
        RequesterValidity {
            name_ok: is_present(&self.name),
            company_ok: is_present(&self.company),
            email_ok: is_valid_email(&self.email),
        }
    }

    /// Inline email message; an untouched (empty) field shows nothing.
    pub fn email_error(&self) -> Option<&'static str> {
        (!self.email.is_empty() && !is_valid_email(&self.email)).then_some(INVALID_EMAIL)
    }
}
