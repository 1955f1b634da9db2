//! Skill extraction from resume text.
//!
//! The marker-word check gates the whole upload pipeline: a document that
//! never mentions "resume" or "cv" yields the `not a valid resume` sentinel
//! and no analysis or market calls are made for it.

use tracing::warn;

use crate::llm_client::Completion;
use crate::resume::prompts::{SKILL_EXTRACT_PROMPT_TEMPLATE, SKILL_EXTRACT_SYSTEM};

pub const NOT_A_VALID_RESUME: &str = "not a valid resume";
pub const NO_SKILLS_FOUND: &str = "no skills found";

/// Only this much of the document is sent to the model.
const SKILL_EXTRACT_CHAR_LIMIT: usize = 2000;

/// A document counts as a resume only if it mentions one of the marker
/// words, case-insensitive.
pub fn is_resume(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("resume") || lower.contains("cv")
}

/// Asks the model for a comma-separated skill list, falling back to the
/// line heuristic, then to the `no skills found` sentinel. Never fails.
pub async fn extract_skills(llm: &dyn Completion, text: &str) -> Vec<String> {
    let head: String = text.chars().take(SKILL_EXTRACT_CHAR_LIMIT).collect();
    let prompt = SKILL_EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", &head);

    let skills = match llm.complete(&prompt, SKILL_EXTRACT_SYSTEM).await {
        Ok(reply) => split_skill_list(&reply),
        Err(e) => {
            warn!("Skill extraction model call failed: {e}");
            Vec::new()
        }
    };

    let skills = if skills.is_empty() {
        heuristic_skills(text)
    } else {
        skills
    };

    if skills.is_empty() {
        vec![NO_SKILLS_FOUND.to_string()]
    } else {
        skills
    }
}

/// Splits a model reply on commas, trimming entries and dropping empties.
pub fn split_skill_list(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Fallback when the model produces nothing usable: keep the source lines
/// that mention "skill", case-insensitive.
pub fn heuristic_skills(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.to_lowercase().contains("skill"))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_resume_detects_markers_case_insensitive() {
        assert!(is_resume("My Resume\nSkills: Rust"));
        assert!(is_resume("CURRICULUM VITAE (CV)"));
        assert!(!is_resume("quarterly sales report"));
    }

    #[test]
    fn test_split_skill_list_trims_and_drops_empties() {
        let skills = split_skill_list(" Rust , SQL ,, Kubernetes ,");
        assert_eq!(skills, vec!["Rust", "SQL", "Kubernetes"]);
    }

    #[test]
    fn test_split_skill_list_empty_reply() {
        assert!(split_skill_list("  ").is_empty());
    }

    #[test]
    fn test_heuristic_keeps_skill_lines_only() {
        let text = "John Doe\nSkills: Rust, SQL\nExperience: 5 years\nSoft skills: teamwork";
        let lines = heuristic_skills(text);
        assert_eq!(lines, vec!["Skills: Rust, SQL", "Soft skills: teamwork"]);
    }

    #[test]
    fn test_heuristic_empty_when_no_skill_lines() {
        assert!(heuristic_skills("John Doe\nExperience: 5 years").is_empty());
    }
}
