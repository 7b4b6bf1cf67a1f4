use serde::{Deserialize, Serialize};
use shared::{domain::CollaboratorId, protocol::EnrolledCollaborator};

/// Editable fields of a collaborator, keyed on the wire by their payload names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CollaboratorField {
    #[serde(rename = "n_tag")]
    Tag,
    #[serde(rename = "nombres")]
    FirstName,
    #[serde(rename = "apellidos")]
    LastName,
    #[serde(rename = "empresa")]
    Company,
    #[serde(rename = "rut")]
    NationalId,
    #[serde(rename = "pasaporte")]
    Passport,
    #[serde(rename = "sap")]
    SapCode,
    #[serde(rename = "gerencia")]
    Department,
    #[serde(rename = "superIntendencia")]
    Division,
    #[serde(rename = "unidad")]
    Unit,
    #[serde(rename = "descripcionCargo")]
    JobTitle,
    #[serde(rename = "n_contrato")]
    ContractNumber,
}

/// How a field's value is shaped on input and checked afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Tag,
    Alphabetic,
    Numeric,
    NationalId,
    Passport,
}

impl CollaboratorField {
    pub const ALL: [CollaboratorField; 12] = [
        CollaboratorField::Tag,
        CollaboratorField::FirstName,
        CollaboratorField::LastName,
        CollaboratorField::Company,
        CollaboratorField::NationalId,
        CollaboratorField::Passport,
        CollaboratorField::SapCode,
        CollaboratorField::Department,
        CollaboratorField::Division,
        CollaboratorField::Unit,
        CollaboratorField::JobTitle,
        CollaboratorField::ContractNumber,
    ];

    pub fn wire_key(self) -> &'static str {
        match self {
            CollaboratorField::Tag => "n_tag",
            CollaboratorField::FirstName => "nombres",
            CollaboratorField::LastName => "apellidos",
            CollaboratorField::Company => "empresa",
            CollaboratorField::NationalId => "rut",
            CollaboratorField::Passport => "pasaporte",
            CollaboratorField::SapCode => "sap",
            CollaboratorField::Department => "gerencia",
            CollaboratorField::Division => "superIntendencia",
            CollaboratorField::Unit => "unidad",
            CollaboratorField::JobTitle => "descripcionCargo",
            CollaboratorField::ContractNumber => "n_contrato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CollaboratorField::Tag => "Tag number",
            CollaboratorField::FirstName => "First names",
            CollaboratorField::LastName => "Last names",
            CollaboratorField::Company => "Company",
            CollaboratorField::NationalId => "National id",
            CollaboratorField::Passport => "Passport",
            CollaboratorField::SapCode => "SAP code",
            CollaboratorField::Department => "Department",
            CollaboratorField::Division => "Division",
            CollaboratorField::Unit => "Unit",
            CollaboratorField::JobTitle => "Job title",
            CollaboratorField::ContractNumber => "Contract number",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            CollaboratorField::Tag => FieldKind::Tag,
            CollaboratorField::SapCode | CollaboratorField::ContractNumber => FieldKind::Numeric,
            CollaboratorField::NationalId => FieldKind::NationalId,
            CollaboratorField::Passport => FieldKind::Passport,
            _ => FieldKind::Alphabetic,
        }
    }

    /// Longest value, in characters, the field will ever store.
    pub fn max_chars(self) -> usize {
        match self {
            CollaboratorField::Tag => 13,
            CollaboratorField::SapCode => 10,
            CollaboratorField::NationalId | CollaboratorField::ContractNumber => 12,
            _ => 50,
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            CollaboratorField::Tag
                | CollaboratorField::FirstName
                | CollaboratorField::LastName
                | CollaboratorField::Company
                | CollaboratorField::JobTitle
        )
    }
}

impl std::fmt::Display for CollaboratorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_key())
    }
}

/// One person being enrolled.
///
/// Optional fields hold `None` while blank and only become `null` when the
/// record is turned into an [`EnrolledCollaborator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collaborator {
    pub id: CollaboratorId,
    pub tag: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub national_id: Option<String>,
    pub passport: Option<String>,
    pub sap_code: Option<String>,
    pub department: Option<String>,
    pub division: Option<String>,
    pub unit: Option<String>,
    pub job_title: String,
    pub contract_number: Option<String>,
}

impl Collaborator {
    pub fn blank(id: CollaboratorId) -> Self {
        Self {
            id,
            tag: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            company: String::new(),
            national_id: None,
            passport: None,
            sap_code: None,
            department: None,
            division: None,
            unit: None,
            job_title: String::new(),
            contract_number: None,
        }
    }

    /// Current value of `field`; blank optional fields read as `""`.
    pub fn value(&self, field: CollaboratorField) -> &str {
        match field {
            CollaboratorField::Tag => self.tag.as_str(),
            CollaboratorField::FirstName => self.first_name.as_str(),
            CollaboratorField::LastName => self.last_name.as_str(),
            CollaboratorField::Company => self.company.as_str(),
            CollaboratorField::JobTitle => self.job_title.as_str(),
            other => self
                .optional_slot(other)
                .and_then(|slot| slot.as_deref())
                .unwrap_or_default(),
        }
    }

    /// Stores an already-shaped value. Empty values clear optional fields.
    pub fn set(&mut self, field: CollaboratorField, value: String) {
        match field {
            CollaboratorField::Tag => self.tag = value,
            CollaboratorField::FirstName => self.first_name = value,
            CollaboratorField::LastName => self.last_name = value,
            CollaboratorField::Company => self.company = value,
            CollaboratorField::JobTitle => self.job_title = value,
            other => {
                if let Some(slot) = self.optional_slot_mut(other) {
                    *slot = Some(value).filter(|v| !v.is_empty());
                }
            }
        }
    }

    pub fn enrolled(&self) -> EnrolledCollaborator {
        EnrolledCollaborator {
            id: self.id,
            tag: self.tag.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company: self.company.clone(),
            national_id: self.national_id.clone(),
            passport: self.passport.clone(),
            sap_code: self.sap_code.clone(),
            department: self.department.clone(),
            division: self.division.clone(),
            unit: self.unit.clone(),
            job_title: self.job_title.clone(),
            contract_number: self.contract_number.clone(),
        }
    }

    fn optional_slot(&self, field: CollaboratorField) -> Option<&Option<String>> {
        let slot = match field {
            CollaboratorField::NationalId => &self.national_id,
            CollaboratorField::Passport => &self.passport,
            CollaboratorField::SapCode => &self.sap_code,
            CollaboratorField::Department => &self.department,
            CollaboratorField::Division => &self.division,
            CollaboratorField::Unit => &self.unit,
            CollaboratorField::ContractNumber => &self.contract_number,
            _ => return None,
        };
        Some(slot)
    }

    fn optional_slot_mut(&mut self, field: CollaboratorField) -> Option<&mut Option<String>> {
        let slot = match field {
            CollaboratorField::NationalId => &mut self.national_id,
            CollaboratorField::Passport => &mut self.passport,
            CollaboratorField::SapCode => &mut self.sap_code,
            CollaboratorField::Department => &mut self.department,
            CollaboratorField::Division => &mut self.division,
            CollaboratorField::Unit => &mut self.unit,
            CollaboratorField::ContractNumber => &mut self.contract_number,
            _ => return None,
        };
        Some(slot)
    }
}
