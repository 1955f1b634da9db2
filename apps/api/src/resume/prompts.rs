// Prompt constants for resume skill extraction.

/// System prompt for skill extraction — enforces a bare comma-separated list.
pub const SKILL_EXTRACT_SYSTEM: &str = "You are a resume analyst. \
    Extract professional skills from resume text. \
    Respond with a single comma-separated list of skills. \
    Do NOT include headings, numbering, or any text besides the list.";

/// Skill extraction prompt template. Replace `{resume_text}` before sending.
pub const SKILL_EXTRACT_PROMPT_TEMPLATE: &str = "\
Extract the professional skills mentioned in the following resume text.
Return them as one comma-separated list, most prominent first.

RESUME TEXT:
{resume_text}";
