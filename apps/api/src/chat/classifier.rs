//! Intent classification for incoming chat messages.
//!
//! Policy is fail-open: an ambiguous label, a transport error, or empty
//! input all land on `Career`, the data-rich branch. Classification never
//! blocks a turn and never surfaces an error to the user.

use serde::Serialize;
use tracing::warn;

use crate::chat::prompts::{CLASSIFY_PROMPT_TEMPLATE, CLASSIFY_SYSTEM};
use crate::llm_client::Completion;

/// The three branches a turn can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Chat,
    Career,
}

/// Classifies one user message with a single model call.
pub async fn classify(llm: &dyn Completion, message: &str) -> Intent {
    if message.trim().is_empty() {
        return Intent::Career;
    }

    let prompt = CLASSIFY_PROMPT_TEMPLATE.replace("{message}", message);
    match llm.complete(&prompt, CLASSIFY_SYSTEM).await {
        Ok(reply) => parse_label(&reply),
        Err(e) => {
            warn!("Classification call failed, defaulting to career: {e}");
            Intent::Career
        }
    }
}

/// Maps a raw model reply to an `Intent`. Anything outside the expected
/// label set defaults to `Career`.
pub fn parse_label(reply: &str) -> Intent {
    match reply.trim().to_lowercase().as_str() {
        "greeting" => Intent::Greeting,
        "chat" => Intent::Chat,
        "career" => Intent::Career,
        other => {
            if !other.is_empty() {
                warn!("Unexpected classification label {other:?}, defaulting to career");
            }
            Intent::Career
        }
    }
}
