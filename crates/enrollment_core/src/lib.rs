//! Enrollment request engine: field validation, the collaborator list and the
//! submission gate that decides when a request can be sent.

pub mod collaborators;
pub mod form;
pub mod record;
pub mod requester;
pub mod validation;

pub use collaborators::{CollaboratorList, MAX_COLLABORATORS};
pub use form::{
    BlockedReason, EnrollmentForm, FormError, SelectedFile, SubmissionState, SUBMIT_CONFIRMATION,
};
pub use record::{Collaborator, CollaboratorField};
pub use requester::{Requester, RequesterField, RequesterValidity};
pub use validation::{transform_input, validate_collaborator, CollaboratorValidation};
