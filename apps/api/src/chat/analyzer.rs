//! Career analysis: one model call for top skills and suggested paths.
//!
//! The reply is opaque formatted text and passes through verbatim — no
//! parsing. On any failure the literal error string stands in for the
//! analysis; nothing propagates past this boundary.

use crate::chat::prompts::{ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM};
use crate::llm_client::Completion;

pub async fn analyze(llm: &dyn Completion, user_input: &str) -> String {
    let prompt = ANALYZE_PROMPT_TEMPLATE.replace("{user_input}", user_input);
    match llm.complete(&prompt, ANALYZE_SYSTEM).await {
        Ok(reply) => reply,
        Err(e) => format!("Error analyzing skills: {e}"),
    }
}
