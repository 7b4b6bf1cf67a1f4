use shared::{domain::CollaboratorId, protocol::EnrollmentPayload};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    collaborators::CollaboratorList,
    record::CollaboratorField,
    requester::{Requester, RequesterField, RequesterValidity},
};

pub const SUBMIT_CONFIRMATION: &str = "Request prepared. Check the console output.";

const ACCEPTED_UPLOAD_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedReason {
    RequesterIncomplete,
    NothingToEnroll,
}

impl BlockedReason {
    pub fn hint(self) -> &'static str {
        match self {
            BlockedReason::RequesterIncomplete => {
                "Complete the requester fields with a valid email."
            }
            BlockedReason::NothingToEnroll => {
                "Add at least one collaborator with the required fields or select a file."
            }
        }
    }
}

impl std::fmt::Display for BlockedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hint())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Blocked(BlockedReason),
    ReadyViaCollaborators,
    ReadyViaFile,
}

impl SubmissionState {
    pub fn can_submit(self) -> bool {
        !matches!(self, SubmissionState::Blocked(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("request cannot be submitted yet: {0}")]
    NotSubmittable(BlockedReason),
    #[error("unsupported upload '{0}': expected an .xlsx or .xls spreadsheet")]
    UnsupportedFile(String),
}

/// A spreadsheet picked for bulk upload. Only the name is ever read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>) -> Result<Self, FormError> {
        let name = name.into();
        let lowered = name.to_ascii_lowercase();
        let accepted = ACCEPTED_UPLOAD_EXTENSIONS
            .iter()
            .any(|ext| lowered.ends_with(ext));
        if !accepted {
            return Err(FormError::UnsupportedFile(name));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The whole enrollment request: requester, collaborators and optional upload.
///
/// The submit gate is derived on demand from the current state, so it can never
/// disagree with the fields it is computed from.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentForm {
    requester: Requester,
    collaborators: CollaboratorList,
    file: Option<SelectedFile>,
}

impl EnrollmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requester(&self) -> &Requester {
        &self.requester
    }

    pub fn collaborators(&self) -> &CollaboratorList {
        &self.collaborators
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn set_requester_field(&mut self, field: RequesterField, value: impl Into<String>) {
        self.requester.set(field, value);
    }

    pub fn requester_validity(&self) -> RequesterValidity {
        self.requester.validity()
    }

    pub fn add_collaborator(&mut self) -> Option<CollaboratorId> {
        self.collaborators.add()
    }

    pub fn remove_collaborator(&mut self, id: CollaboratorId) -> bool {
        self.collaborators.remove(id)
    }

    pub fn update_collaborator(
        &mut self,
        id: CollaboratorId,
        field: CollaboratorField,
        raw: &str,
    ) -> bool {
        self.collaborators.update(id, field, raw)
    }

    pub fn select_file(&mut self, name: impl Into<String>) -> Result<(), FormError> {
        let file = SelectedFile::new(name)?;
        debug!(file = file.name(), "bulk upload file selected");
        self.file = Some(file);
        Ok(())
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn state(&self) -> SubmissionState {
        if !self.requester.validity().all() {
            SubmissionState::Blocked(BlockedReason::RequesterIncomplete)
        } else if self.file.is_some() {
            SubmissionState::ReadyViaFile
        } else if self.collaborators.has_valid() {
            SubmissionState::ReadyViaCollaborators
        } else {
            SubmissionState::Blocked(BlockedReason::NothingToEnroll)
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state().can_submit()
    }

    /// Builds the request payload from the requester and every valid
    /// collaborator. Invalid collaborators are left out rather than blocking.
    pub fn submit(&self) -> Result<EnrollmentPayload, FormError> {
        if let SubmissionState::Blocked(reason) = self.state() {
            return Err(FormError::NotSubmittable(reason));
        }

        let payload = EnrollmentPayload {
            requester_name: self.requester.name.trim().to_string(),
            requester_company: self.requester.company.trim().to_string(),
            requester_email: self.requester.email.trim().to_string(),
            collaborators: self.collaborators.valid().map(|c| c.enrolled()).collect(),
            uploaded_file: self.file.as_ref().map(|f| f.name.clone()),
        };
        info!(
            collaborators = payload.collaborators.len(),
            with_file = payload.uploaded_file.is_some(),
            "enrollment request prepared"
        );
        Ok(payload)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
