use std::fmt::Write as _;

use enrollment_core::{EnrollmentForm, SubmissionState};

/// Human-readable summary of field errors and the submit gate.
pub fn render(form: &EnrollmentForm) -> String {
    let mut out = String::new();
    let requester = form.requester();
    let validity = requester.validity();

    let _ = writeln!(out, "Requester");
    if !validity.name_ok {
        let _ = writeln!(out, "  name: required");
    }
    if !validity.company_ok {
        let _ = writeln!(out, "  company: required");
    }
    if let Some(message) = requester.email_error() {
        let _ = writeln!(out, "  email: {message}");
    } else if !validity.email_ok {
        let _ = writeln!(out, "  email: required");
    }
    if validity.all() {
        let _ = writeln!(out, "  ok");
    }

    let list = form.collaborators();
    if list.is_empty() {
        let _ = writeln!(out, "No collaborators entered");
    }
    for collaborator in list.iter() {
        let label = list
            .position_label(collaborator.id)
            .unwrap_or_else(|| format!("Collaborator {}", collaborator.id));
        let _ = writeln!(out, "{label} (id {})", collaborator.id);
        match list.errors_for(collaborator.id) {
            None => {
                let _ = writeln!(out, "  ok");
            }
            Some(validation) => {
                for (field, message) in &validation.errors {
                    let _ = writeln!(out, "  {}: {message}", field.label());
                }
            }
        }
    }

    if let Some(file) = form.selected_file() {
        let _ = writeln!(out, "Selected file: {}", file.name());
    }

    let gate = match form.state() {
        SubmissionState::Blocked(reason) => format!("blocked: {reason}"),
        SubmissionState::ReadyViaCollaborators => "ready (collaborators)".to_string(),
        SubmissionState::ReadyViaFile => "ready (bulk upload file)".to_string(),
    };
    let _ = writeln!(out, "Submission: {gate}");
    out
}
