//! Replays a saved draft through the form so the same input shaping, caps and
//! validation apply as for interactive edits.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::Context;
use enrollment_core::{
    CollaboratorField, EnrollmentForm, Requester, RequesterField, MAX_COLLABORATORS,
};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub requester: Requester,
    #[serde(default)]
    pub collaborators: Vec<BTreeMap<CollaboratorField, String>>,
    #[serde(default)]
    pub file: Option<String>,
}

impl Draft {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read draft '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("draft '{}' is not valid JSON", path.display()))
    }

    pub fn into_form(self) -> anyhow::Result<EnrollmentForm> {
        let mut form = EnrollmentForm::new();
        form.set_requester_field(RequesterField::Name, self.requester.name);
        form.set_requester_field(RequesterField::Company, self.requester.company);
        form.set_requester_field(RequesterField::Email, self.requester.email);

        if self.collaborators.len() > MAX_COLLABORATORS {
            warn!(
                in_draft = self.collaborators.len(),
                limit = MAX_COLLABORATORS,
                "draft exceeds the collaborator limit; extra entries are ignored"
            );
        }
        for fields in self.collaborators {
            let Some(id) = form.add_collaborator() else {
                break;
            };
            for (field, value) in fields {
                form.update_collaborator(id, field, &value);
            }
        }

        if let Some(name) = self.file {
            form.select_file(name)?;
        }
        Ok(form)
    }
}

#[cfg(test)]
#[path = "tests/draft_tests.rs"]
mod tests;
