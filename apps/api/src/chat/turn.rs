//! The turn state machine: one user input through to one composed reply.
//!
//! Every turn runs to completion. External failures collapse to sentinels
//! at their own boundary, so the only errors a handler sees are an unknown
//! session or an unsupported upload.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::analyzer::analyze;
use crate::chat::classifier::{classify, Intent};
use crate::chat::composer::{compose, with_nudge};
use crate::chat::policy::{self, REDIRECT_NUDGE};
use crate::chat::prompts::{
    CASUAL_CHAT_PROMPT_TEMPLATE, GREETING_PROMPT_TEMPLATE, PERSONA_SYSTEM,
};
use crate::chat::session::SessionStore;
use crate::errors::AppError;
use crate::llm_client::Completion;
use crate::market::MarketData;
use crate::resume::extract::{extract_text, ExtractError};
use crate::resume::skills::{extract_skills, is_resume, NOT_A_VALID_RESUME, NO_SKILLS_FOUND};

/// Market query used when the input gives us nothing better, matching the
/// original assistant's default.
const DEFAULT_MARKET_QUERY: &str = "Python Developer";

/// Scripted replies for when the greeting/persona model call fails.
const GREETING_FALLBACK: &str =
    "Hello! I'm the Career Path Oracle. Ask me about career options or upload your resume.";
const CASUAL_CHAT_FALLBACK: &str =
    "Let's talk careers! What roles or skills are you curious about?";

/// Shown when the uploaded document could not be read at all.
const EXTRACT_FAILED: &str = "Error extracting skills from resume";

#[derive(Debug, Serialize)]
pub struct ChatTurnOutcome {
    pub reply: String,
    pub intent: Intent,
}

#[derive(Debug, Serialize)]
pub struct ResumeTurnOutcome {
    pub reply: String,
    pub valid_resume: bool,
    pub skills: Vec<String>,
}

/// Runs one text turn: classify, branch, compose, append.
pub async fn run_chat_turn(
    llm: &dyn Completion,
    market: &dyn MarketData,
    sessions: &SessionStore,
    session_id: Uuid,
    message: &str,
) -> Result<ChatTurnOutcome, AppError> {
    let session = sessions
        .snapshot(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    let trimmed = message.trim();
    let intent = classify(llm, trimmed).await;
    let (chat_count, nudge) = policy::apply(intent, session.chat_count);
    info!(%session_id, ?intent, chat_count, "classified turn");

    let reply = match intent {
        Intent::Greeting => {
            let prompt = GREETING_PROMPT_TEMPLATE.replace("{message}", trimmed);
            llm.complete(&prompt, PERSONA_SYSTEM)
                .await
                .unwrap_or_else(|e| {
                    warn!("Greeting call failed, using scripted reply: {e}");
                    GREETING_FALLBACK.to_string()
                })
        }
        Intent::Chat => {
            let prompt = CASUAL_CHAT_PROMPT_TEMPLATE.replace("{message}", trimmed);
            llm.complete(&prompt, PERSONA_SYSTEM)
                .await
                .unwrap_or_else(|e| {
                    warn!("Persona chat call failed, using scripted reply: {e}");
                    CASUAL_CHAT_FALLBACK.to_string()
                })
        }
        Intent::Career => {
            let query = if trimmed.is_empty() {
                DEFAULT_MARKET_QUERY
            } else {
                trimmed
            };
            let analysis = analyze(llm, query).await;
            let snapshot = market.snapshot(query).await;
            compose(&analysis, &snapshot)
        }
    };

    let reply = with_nudge(reply, nudge, REDIRECT_NUDGE);
    sessions.record_turn(session_id, Some(message.to_string()), reply.clone(), chat_count);

    Ok(ChatTurnOutcome { reply, intent })
}

/// Runs one resume-upload turn. A document that fails the marker check
/// short-circuits: no skill extraction, no analysis, no market calls.
pub async fn run_resume_turn(
    llm: &dyn Completion,
    market: &dyn MarketData,
    sessions: &SessionStore,
    session_id: Uuid,
    content_type: &str,
    data: &[u8],
) -> Result<ResumeTurnOutcome, AppError> {
    let session = sessions
        .snapshot(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
    let nudge = session.chat_count > 3;

    let text = match extract_text(content_type, data) {
        Ok(text) => text,
        Err(ExtractError::UnsupportedFormat) => {
            return Err(AppError::Validation(
                ExtractError::UnsupportedFormat.to_string(),
            ));
        }
        Err(ExtractError::Parse(e)) => {
            warn!(%session_id, "Resume extraction failed: {e}");
            sessions.set_resume(session_id, false, Vec::new());
            let reply = EXTRACT_FAILED.to_string();
            sessions.record_turn(session_id, None, reply.clone(), session.chat_count);
            return Ok(ResumeTurnOutcome {
                reply,
                valid_resume: false,
                skills: Vec::new(),
            });
        }
    };

    if !is_resume(&text) {
        info!(%session_id, "Upload rejected: marker words missing");
        sessions.set_resume(session_id, false, Vec::new());
        let reply = NOT_A_VALID_RESUME.to_string();
        sessions.record_turn(session_id, None, reply.clone(), session.chat_count);
        return Ok(ResumeTurnOutcome {
            reply,
            valid_resume: false,
            skills: Vec::new(),
        });
    }

    let skills = extract_skills(llm, &text).await;
    sessions.set_resume(session_id, true, skills.clone());

    let query = skills
        .first()
        .filter(|s| s.as_str() != NO_SKILLS_FOUND)
        .map(String::as_str)
        .unwrap_or(DEFAULT_MARKET_QUERY);
    let analysis = analyze(llm, &skills.join(", ")).await;
    let snapshot = market.snapshot(query).await;

    let reply = with_nudge(compose(&analysis, &snapshot), nudge, REDIRECT_NUDGE);
    sessions.record_turn(session_id, None, reply.clone(), session.chat_count);

    Ok(ResumeTurnOutcome {
        reply,
        valid_resume: true,
        skills,
    })
}
