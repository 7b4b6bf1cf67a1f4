use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode, Url};
use shared::{domain::Person, error::ApiError};
use tracing::info;

/// Builds `{server_url}/api/person/{identifier}` with the identifier escaped as
/// a single path segment.
pub fn person_url(server_url: &str, identifier: &str) -> Result<Url> {
    let mut url = Url::parse(server_url)?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("server url '{server_url}' cannot carry a path"))?
        .pop_if_empty()
        .extend(["api", "person", identifier]);
    Ok(url)
}

/// `Ok(None)` when the service answers 404.
pub async fn fetch_person(
    http: &Client,
    server_url: &str,
    identifier: &str,
) -> Result<Option<Person>> {
    let url = person_url(server_url, identifier)?;
    let response = http.get(url).send().await?;

    if response.status() == StatusCode::NOT_FOUND {
        let body: ApiError = response.json().await?;
        info!(%identifier, error = %body.message, "person lookup returned not found");
        return Ok(None);
    }

    let response = response.error_for_status()?;
    Ok(Some(response.json().await?))
}
