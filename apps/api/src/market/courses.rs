//! Free-course search via the Udemy free-courses API.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

const COURSES_URL: &str =
    "https://udemy-paid-courses-for-free-api.p.rapidapi.com/rapidapi/courses/search";
const COURSES_HOST: &str = "udemy-paid-courses-for-free-api.p.rapidapi.com";
pub const MAX_COURSES: usize = 3;

/// A single course listing. Missing title maps to "N/A", missing url to "#".
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseListing {
    pub title: String,
    pub url: String,
}

/// Searches free courses for `query`. Any failure returns the empty list.
pub async fn search_courses(
    http: &Client,
    rapidapi_key: Option<&str>,
    query: &str,
) -> Vec<CourseListing> {
    let Some(key) = rapidapi_key else {
        debug!("RAPIDAPI_KEY not configured; skipping course search");
        return Vec::new();
    };

    let response = http
        .get(COURSES_URL)
        .header("X-RapidAPI-Key", key)
        .header("X-RapidAPI-Host", COURSES_HOST)
        .query(&[
            ("query", query),
            ("language", "en"),
            ("page", "1"),
            ("page_size", "10"),
        ])
        .send()
        .await;

    let payload: Value = match response {
        Ok(r) if r.status().is_success() => match r.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!("Course search returned malformed payload: {e}");
                return Vec::new();
            }
        },
        Ok(r) => {
            warn!("Course search returned status {}", r.status());
            return Vec::new();
        }
        Err(e) => {
            warn!("Course search request failed: {e}");
            return Vec::new();
        }
    };

    normalize_courses(&payload)
}

/// Extracts at most `MAX_COURSES` listings from a course-search payload.
pub fn normalize_courses(payload: &Value) -> Vec<CourseListing> {
    payload
        .get("courses")
        .and_then(Value::as_array)
        .map(|courses| {
            courses
                .iter()
                .take(MAX_COURSES)
                .map(|c| CourseListing {
                    title: c
                        .get("title")
                        .and_then(Value::as_str)
                        .unwrap_or("N/A")
                        .to_string(),
                    url: c
                        .get("url")
                        .and_then(Value::as_str)
                        .unwrap_or("#")
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}
