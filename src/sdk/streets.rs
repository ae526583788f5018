use std::collections::BTreeSet;

use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

use super::config::GeoConfig;

#[derive(Error, Debug)]
pub enum StreetsError {
    #[error("overpass returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("overpass request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to parse overpass response: {0}")]
    Parse(#[from] serde_json::Error),
}

// --- Wire format of the Overpass interpreter (out:json) ---

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(default)]
    tags: Option<OverpassTags>,
}

#[derive(Debug, Deserialize)]
struct OverpassTags {
    name: Option<String>,
}

/// All streets in `city` whose name contains `pattern`, case-insensitively.
/// Returns a sorted list with duplicates collapsed (the same street often
/// spans several ways).
pub fn find_streets(
    config: &GeoConfig,
    city: &str,
    pattern: &str,
) -> Result<Vec<String>, StreetsError> {
    let query = format!(
        r#"[out:json];
area["name"="{city}"]->.searchArea;
way["highway"]["name"~"{pattern}", i](area.searchArea);
out body;"#
    );
    log::debug!("Overpass query for city \"{}\": {}", city, query);

    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.lookup_timeout)
        .build()?;
    let response = client
        .get(&config.overpass_url)
        .query(&[("data", &query)])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        log::error!("Overpass returned non-success status {}", status);
        return Err(StreetsError::Status(status));
    }

    let body: OverpassResponse = serde_json::from_str(&response.text()?)?;
    Ok(street_names(body))
}

fn street_names(response: OverpassResponse) -> Vec<String> {
    let names: BTreeSet<String> = response
        .elements
        .into_iter()
        .filter_map(|element| element.tags.and_then(|tags| tags.name))
        .collect();
    names.into_iter().collect()
}
