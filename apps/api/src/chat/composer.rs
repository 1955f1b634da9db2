//! Response composition. Pure formatting: identical inputs always produce
//! byte-identical output.

use crate::market::{CourseListing, JobPosting, MarketSnapshot, SalaryEstimate};

pub const NO_JOBS_FOUND: &str = "No jobs found";
pub const NO_COURSES_FOUND: &str = "No courses found";
pub const SALARY_UNAVAILABLE: &str = "Data not available";

/// Renders the four sections in their fixed heading order.
pub fn compose(analysis: &str, market: &MarketSnapshot) -> String {
    format!(
        "### Analysis Results:\n{}\n\n\
         ### Related Job Postings:\n{}\n\n\
         ### Salary Insights:\nMedian Salary: {}\n\n\
         ### Free Courses to Learn:\n{}",
        analysis,
        format_jobs(&market.jobs),
        format_salary(&market.salary),
        format_courses(&market.courses),
    )
}

fn format_jobs(jobs: &[JobPosting]) -> String {
    if jobs.is_empty() {
        return NO_JOBS_FOUND.to_string();
    }
    jobs.iter()
        .map(|job| format!("- {} at {}", job.title, job.employer))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_salary(salary: &SalaryEstimate) -> String {
    match salary {
        SalaryEstimate::Median(_) => salary.to_string(),
        SalaryEstimate::Unavailable => SALARY_UNAVAILABLE.to_string(),
    }
}

fn format_courses(courses: &[CourseListing]) -> String {
    if courses.is_empty() {
        return NO_COURSES_FOUND.to_string();
    }
    courses
        .iter()
        .map(|course| format!("- [{}]({})", course.title, course.url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Appends the redirect nudge when the throttle says so.
pub fn with_nudge(reply: String, nudge: bool, nudge_text: &str) -> String {
    if nudge {
        format!("{reply}\n\n{nudge_text}")
    } else {
        reply
    }
}
