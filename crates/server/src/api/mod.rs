use directory::PersonDirectory;
use shared::{domain::Person, error::ApiError};
use tracing::debug;

#[derive(Clone)]
pub struct ApiContext {
    pub directory: PersonDirectory,
}

pub fn person_route() -> &'static str {
    "/api/person/:identifier"
}

pub fn find_person(ctx: &ApiContext, identifier: &str) -> Result<Person, ApiError> {
    match ctx.directory.find(identifier) {
        Some(person) => Ok(person.clone()),
        None => {
            debug!(%identifier, "person lookup missed");
            Err(ApiError::person_not_found())
        }
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
