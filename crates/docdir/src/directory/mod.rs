use crate::prelude::{println, *};
use docdir_core::directory::Practitioner;
use regex::Regex;

pub mod list;
pub mod specialties;
pub mod suggest;

/// Production mock endpoint serving the practitioner payload.
pub const API_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// The shell never hands the core more records than this; truncation is the
/// fetch collaborator's job, not the core's.
pub const MAX_RECORDS: usize = 100;

/// Fetch the full practitioner list from the directory endpoint.
pub async fn fetch_practitioners(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Practitioner>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to load practitioners: {}", e))?;

    if !response.status().is_success() {
        return Err(eyre!(
            "Failed to load practitioners: HTTP {}",
            response.status()
        ));
    }

    let mut practitioners: Vec<Practitioner> = response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse practitioner payload: {}", e))?;

    practitioners.truncate(MAX_RECORDS);
    Ok(practitioners)
}

/// Accept either a full shared address or a bare query string.
pub fn extract_query(input: &str) -> String {
    if input.contains("://") {
        // Full URL: keep everything between '?' and an optional fragment.
        let re = Regex::new(r"\?([^#]*)").unwrap();
        if let Some(caps) = re.captures(input) {
            if let Some(query) = caps.get(1) {
                return query.as_str().to_string();
            }
        }
        return String::new();
    }

    input.trim_start_matches('?').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_query_from_full_url() {
        assert_eq!(
            extract_query("https://example.com/doctors?search=skin&sortOrder=experience"),
            "search=skin&sortOrder=experience"
        );
    }

    #[test]
    fn test_extract_query_drops_fragment() {
        assert_eq!(
            extract_query("https://example.com/doctors?search=skin#results"),
            "search=skin"
        );
    }

    #[test]
    fn test_extract_query_url_without_query() {
        assert_eq!(extract_query("https://example.com/doctors"), "");
    }

    #[test]
    fn test_extract_query_bare_query_string() {
        assert_eq!(extract_query("search=skin"), "search=skin");
        assert_eq!(extract_query("?search=skin"), "search=skin");
    }
}
