//! Job-postings search via the JSearch API.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

const JSEARCH_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";
/// At most this many postings reach the composer, regardless of how many
/// the upstream service returns.
pub const MAX_POSTINGS: usize = 3;

/// A single job posting. Missing upstream fields map to "N/A".
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobPosting {
    pub title: String,
    pub employer: String,
}

/// Searches job postings for `query`. Pagination is fixed to a single page.
/// Any failure — missing credential, transport, status, payload — returns
/// the empty list.
pub async fn search_jobs(http: &Client, rapidapi_key: Option<&str>, query: &str) -> Vec<JobPosting> {
    let Some(key) = rapidapi_key else {
        debug!("RAPIDAPI_KEY not configured; skipping job search");
        return Vec::new();
    };

    let response = http
        .get(JSEARCH_URL)
        .header("X-RapidAPI-Key", key)
        .header("X-RapidAPI-Host", JSEARCH_HOST)
        .query(&[("query", query), ("page", "1"), ("num_pages", "1")])
        .send()
        .await;

    let payload: Value = match response {
        Ok(r) if r.status().is_success() => match r.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!("Job search returned malformed payload: {e}");
                return Vec::new();
            }
        },
        Ok(r) => {
            warn!("Job search returned status {}", r.status());
            return Vec::new();
        }
        Err(e) => {
            warn!("Job search request failed: {e}");
            return Vec::new();
        }
    };

    normalize_postings(&payload)
}

/// Extracts at most `MAX_POSTINGS` postings from a JSearch payload.
pub fn normalize_postings(payload: &Value) -> Vec<JobPosting> {
    payload
        .get("data")
        .and_then(Value::as_array)
        .map(|postings| {
            postings
                .iter()
                .take(MAX_POSTINGS)
                .map(|p| JobPosting {
                    title: string_or_na(p.get("job_title")),
                    employer: string_or_na(p.get("employer_name")),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn string_or_na(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or("N/A")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_truncates_to_three() {
        let payload = json!({
            "data": [
                {"job_title": "Data Scientist", "employer_name": "Acme"},
                {"job_title": "ML Engineer", "employer_name": "Globex"},
                {"job_title": "Analyst", "employer_name": "Initech"},
                {"job_title": "Quant", "employer_name": "Hooli"}
            ]
        });
        let postings = normalize_postings(&payload);
        assert_eq!(postings.len(), 3);
        assert_eq!(postings[0].title, "Data Scientist");
        assert_eq!(postings[2].employer, "Initech");
    }

    #[test]
    fn test_normalize_maps_missing_fields_to_na() {
        let payload = json!({
            "data": [
                {"employer_name": "Acme"},
                {"job_title": "ML Engineer"}
            ]
        });
        let postings = normalize_postings(&payload);
        assert_eq!(postings[0].title, "N/A");
        assert_eq!(postings[0].employer, "Acme");
        assert_eq!(postings[1].employer, "N/A");
    }

    #[test]
    fn test_normalize_missing_data_key_is_empty() {
        let payload = json!({"status": "error"});
        assert!(normalize_postings(&payload).is_empty());
    }

    #[test]
    fn test_normalize_non_array_data_is_empty() {
        let payload = json!({"data": "oops"});
        assert!(normalize_postings(&payload).is_empty());
    }
}
