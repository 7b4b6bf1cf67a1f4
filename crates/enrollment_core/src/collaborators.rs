use std::collections::BTreeMap;

use shared::domain::CollaboratorId;
use tracing::debug;

use crate::{
    record::{Collaborator, CollaboratorField},
    validation::{transform_input, validate_collaborator, CollaboratorValidation},
};

pub const MAX_COLLABORATORS: usize = 20;

/// Ordered collaborators plus the cached errors for the invalid ones.
///
/// Every mutation re-validates the whole list, so `errors` always reflects the
/// current records. Ids come from a high-water mark and are never handed out
/// twice, even after removals.
#[derive(Debug, Clone, Default)]
pub struct CollaboratorList {
    entries: Vec<Collaborator>,
    errors: BTreeMap<CollaboratorId, CollaboratorValidation>,
    section_open: bool,
    highest_id: u32,
}

impl CollaboratorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_COLLABORATORS
    }

    pub fn section_open(&self) -> bool {
        self.section_open
    }

    pub fn add(&mut self) -> Option<CollaboratorId> {
        if !self.can_add() {
            debug!(
                limit = MAX_COLLABORATORS,
                "collaborator list is full; add ignored"
            );
            return None;
        }

        self.highest_id += 1;
        let id = CollaboratorId(self.highest_id);
        self.entries.push(Collaborator::blank(id));
        self.section_open = true;
        self.revalidate();
        debug!(collaborator_id = id.0, count = self.entries.len(), "collaborator added");
        Some(id)
    }

    /// Drops the record and its cached errors. Returns `false` for unknown ids.
    pub fn remove(&mut self, id: CollaboratorId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|c| c.id != id);
        if self.entries.len() == before {
            return false;
        }

        self.errors.remove(&id);
        if self.entries.is_empty() {
            self.section_open = false;
        }
        self.revalidate();
        debug!(collaborator_id = id.0, count = self.entries.len(), "collaborator removed");
        true
    }

    /// Shapes `raw` for `field` and stores it, leaving the other fields alone.
    pub fn update(&mut self, id: CollaboratorId, field: CollaboratorField, raw: &str) -> bool {
        let Some(collaborator) = self.entries.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        collaborator.set(field, transform_input(field, raw));
        self.revalidate();
        true
    }

    pub fn get(&self, id: CollaboratorId) -> Option<&Collaborator> {
        self.entries.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collaborator> {
        self.entries.iter()
    }

    pub fn errors(&self) -> &BTreeMap<CollaboratorId, CollaboratorValidation> {
        &self.errors
    }

    pub fn errors_for(&self, id: CollaboratorId) -> Option<&CollaboratorValidation> {
        self.errors.get(&id)
    }

    pub fn is_valid(&self, id: CollaboratorId) -> bool {
        self.get(id).is_some() && !self.errors.contains_key(&id)
    }

    pub fn valid(&self) -> impl Iterator<Item = &Collaborator> {
        let errors = &self.errors;
        self.entries
            .iter()
            .filter(move |c| !errors.contains_key(&c.id))
    }

    pub fn has_valid(&self) -> bool {
        self.valid().next().is_some()
    }

    /// Caption for the add button.
    pub fn add_label(&self) -> &'static str {
        if !self.can_add() {
            "Maximum 20 collaborators"
        } else if self.entries.is_empty() {
            "Add collaborator"
        } else {
            "Add another collaborator"
        }
    }

    /// "Collaborator N", numbered by current position rather than id.
    pub fn position_label(&self, id: CollaboratorId) -> Option<String> {
        self.entries
            .iter()
            .position(|c| c.id == id)
            .map(|index| format!("Collaborator {}", index + 1))
    }

    fn revalidate(&mut self) {
        self.errors = self
            .entries
            .iter()
            .filter_map(|c| {
                let validation = validate_collaborator(c);
                (!validation.is_valid()).then_some((c.id, validation))
            })
            .collect();
    }
}

#[cfg(test)]
#[path = "tests/collaborators_tests.rs"]
mod tests;
