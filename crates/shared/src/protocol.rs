use serde::{Deserialize, Serialize};

use crate::domain::CollaboratorId;

/// One enrolled collaborator as it appears in a submitted request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledCollaborator {
    pub id: CollaboratorId,
    #[serde(rename = "n_tag")]
    pub tag: String,
    #[serde(rename = "nombres")]
    pub first_name: String,
    #[serde(rename = "apellidos")]
    pub last_name: String,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "rut")]
    pub national_id: Option<String>,
    #[serde(rename = "pasaporte")]
    pub passport: Option<String>,
    #[serde(rename = "sap")]
    pub sap_code: Option<String>,
    #[serde(rename = "gerencia")]
    pub department: Option<String>,
    #[serde(rename = "superIntendencia")]
    pub division: Option<String>,
    #[serde(rename = "unidad")]
    pub unit: Option<String>,
    #[serde(rename = "descripcionCargo")]
    pub job_title: String,
    #[serde(rename = "n_contrato")]
    pub contract_number: Option<String>,
}

/// The single JSON object emitted when an enrollment request is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentPayload {
    #[serde(rename = "solicitante")]
    pub requester_name: String,
    #[serde(rename = "empresaSolicitante")]
    pub requester_company: String,
    #[serde(rename = "correoSolicitante")]
    pub requester_email: String,
    #[serde(rename = "enrolados")]
    pub collaborators: Vec<EnrolledCollaborator>,
    #[serde(rename = "archivoCargado")]
    pub uploaded_file: Option<String>,
}
