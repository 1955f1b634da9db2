//! Salary estimate via the Adzuna histogram API.

use reqwest::Client;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, warn};

const ADZUNA_URL: &str = "https://api.adzuna.com/v1/api/jobs/gb/histogram";

/// A salary estimate, or the explicit "N/A" sentinel when the service
/// failed or had no data. Never cached.
#[derive(Debug, Clone, PartialEq)]
pub enum SalaryEstimate {
    Median(f64),
    Unavailable,
}

impl Serialize for SalaryEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SalaryEstimate::Median(value) => serializer.serialize_f64(*value),
            SalaryEstimate::Unavailable => serializer.serialize_str("N/A"),
        }
    }
}

impl std::fmt::Display for SalaryEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SalaryEstimate::Median(value) => write!(f, "{value}"),
            SalaryEstimate::Unavailable => write!(f, "N/A"),
        }
    }
}

/// Fetches the median salary for `query`. Any failure, including missing
/// credentials, yields `Unavailable`.
pub async fn get_salary(
    http: &Client,
    app_id: Option<&str>,
    app_key: Option<&str>,
    query: &str,
) -> SalaryEstimate {
    let (Some(app_id), Some(app_key)) = (app_id, app_key) else {
        debug!("Adzuna credentials not configured; skipping salary lookup");
        return SalaryEstimate::Unavailable;
    };

    let response = http
        .get(ADZUNA_URL)
        .query(&[("app_id", app_id), ("app_key", app_key), ("what", query)])
        .send()
        .await;

    let payload: Value = match response {
        Ok(r) if r.status().is_success() => match r.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!("Salary lookup returned malformed payload: {e}");
                return SalaryEstimate::Unavailable;
            }
        },
        Ok(r) => {
            warn!("Salary lookup returned status {}", r.status());
            return SalaryEstimate::Unavailable;
        }
        Err(e) => {
            warn!("Salary lookup request failed: {e}");
            return SalaryEstimate::Unavailable;
        }
    };

    extract_median(&payload)
}

/// Pulls the median figure out of an Adzuna payload.
/// Accepts either `median_salary` or `median` as the field name.
pub fn extract_median(payload: &Value) -> SalaryEstimate {
    payload
        .get("median_salary")
        .or_else(|| payload.get("median"))
        .and_then(Value::as_f64)
        .map(SalaryEstimate::Median)
        .unwrap_or(SalaryEstimate::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_median_salary_field() {
        let payload = json!({"median_salary": 52000.0});
        assert_eq!(extract_median(&payload), SalaryEstimate::Median(52000.0));
    }

    #[test]
    fn test_extract_median_field_alias() {
        let payload = json!({"median": 48000});
        assert_eq!(extract_median(&payload), SalaryEstimate::Median(48000.0));
    }

    #[test]
    fn test_extract_missing_field_is_unavailable() {
        let payload = json!({"histogram": {}});
        assert_eq!(extract_median(&payload), SalaryEstimate::Unavailable);
    }

    #[test]
    fn test_extract_non_numeric_is_unavailable() {
        let payload = json!({"median_salary": "lots"});
        assert_eq!(extract_median(&payload), SalaryEstimate::Unavailable);
    }

    #[test]
    fn test_display_sentinel() {
        assert_eq!(SalaryEstimate::Unavailable.to_string(), "N/A");
        assert_eq!(SalaryEstimate::Median(52000.0).to_string(), "52000");
    }
}
