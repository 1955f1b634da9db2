//! Casual-chat throttling policy.
//!
//! Pure function of (intent, prior count): "chat" turns increment the
//! counter, "career" turns reset it, greetings leave it alone. Once the
//! counter passes the threshold the composed reply gets the redirect nudge.

use crate::chat::classifier::Intent;

/// Appended to the reply once casual chat has dominated the conversation.
pub const REDIRECT_NUDGE: &str =
    "By the way, I'm at my best with career questions. Ask me about skills, \
     roles, or salaries, or upload your resume!";

/// Consecutive casual turns tolerated before nudging.
const CHAT_NUDGE_THRESHOLD: u32 = 3;

/// Applies one classification to the casual-chat counter.
/// Returns the new counter value and whether the reply should carry the nudge.
pub fn apply(intent: Intent, prior_count: u32) -> (u32, bool) {
    let new_count = match intent {
        Intent::Chat => prior_count + 1,
        Intent::Career => 0,
        Intent::Greeting => prior_count,
    };
    (new_count, new_count > CHAT_NUDGE_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_increments_by_one() {
        assert_eq!(apply(Intent::Chat, 0), (1, false));
        assert_eq!(apply(Intent::Chat, 2), (3, false));
    }

    #[test]
    fn test_career_resets_to_zero() {
        assert_eq!(apply(Intent::Career, 7), (0, false));
    }

    #[test]
    fn test_greeting_leaves_count_unchanged() {
        assert_eq!(apply(Intent::Greeting, 2), (2, false));
    }

    #[test]
    fn test_nudge_fires_above_threshold() {
        // 3 consecutive chat turns: no nudge. The 4th crosses the line.
        assert_eq!(apply(Intent::Chat, 2), (3, false));
        assert_eq!(apply(Intent::Chat, 3), (4, true));
    }

    #[test]
    fn test_greeting_nudges_when_count_already_high() {
        assert_eq!(apply(Intent::Greeting, 4), (4, true));
    }
}
