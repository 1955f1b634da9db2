//! Market Data Aggregator — job postings, salary estimate, and free courses
//! for a single skill or job title.
//!
//! The three sub-operations are independent and order-insensitive, so they
//! are issued concurrently and joined before composing. Each one owns its
//! failure boundary: a network error, non-2xx status, malformed payload, or
//! missing credential collapses to that operation's sentinel and never
//! touches the siblings.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::Config;

pub mod courses;
pub mod jobs;
pub mod salary;

pub use courses::CourseListing;
pub use jobs::JobPosting;
pub use salary::SalaryEstimate;

/// Per-call timeout. A stalled upstream converts into the same sentinel
/// as any other failure.
const MARKET_CALL_TIMEOUT_SECS: u64 = 5;

/// The joined result of the three-way fan-out.
#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    pub jobs: Vec<JobPosting>,
    pub salary: SalaryEstimate,
    pub courses: Vec<CourseListing>,
}

impl MarketSnapshot {
    /// Snapshot with every integration at its failure sentinel.
    pub fn empty() -> Self {
        Self {
            jobs: Vec::new(),
            salary: SalaryEstimate::Unavailable,
            courses: Vec::new(),
        }
    }
}

/// Seam for the aggregator. The turn pipeline only sees this trait, so
/// tests can count calls and script snapshots without a network.
#[async_trait]
pub trait MarketData: Send + Sync {
    async fn snapshot(&self, query: &str) -> MarketSnapshot;
}

/// Live aggregator over JSearch, Adzuna, and the free-course search API.
#[derive(Clone)]
pub struct MarketClient {
    http: Client,
    rapidapi_key: Option<String>,
    adzuna_app_id: Option<String>,
    adzuna_app_key: Option<String>,
}

impl MarketClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(MARKET_CALL_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            rapidapi_key: config.rapidapi_key.clone(),
            adzuna_app_id: config.adzuna_app_id.clone(),
            adzuna_app_key: config.adzuna_app_key.clone(),
        }
    }
}

#[async_trait]
impl MarketData for MarketClient {
    async fn snapshot(&self, query: &str) -> MarketSnapshot {
        let (jobs, salary, courses) = tokio::join!(
            jobs::search_jobs(&self.http, self.rapidapi_key.as_deref(), query),
            salary::get_salary(
                &self.http,
                self.adzuna_app_id.as_deref(),
                self.adzuna_app_key.as_deref(),
                query,
            ),
            courses::search_courses(&self.http, self.rapidapi_key.as_deref(), query),
        );
        MarketSnapshot {
            jobs,
            salary,
            courses,
        }
    }
}
