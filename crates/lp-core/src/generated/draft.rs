use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Word ceiling the drafting prompt asks the model to respect.
pub const MAX_EMAIL_WORDS: usize = 150;

/// Subject and body of a generated cold email.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    #[must_use]
    pub fn exceeds_word_limit(&self) -> bool {
        self.word_count() > MAX_EMAIL_WORDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_ignores_extra_whitespace() {
        let draft = EmailDraft {
            subject: "Quick question".into(),
            body: "Hi Dana,\n\n  would a   15-minute call work?".into(),
        };
        assert_eq!(draft.word_count(), 7);
        assert!(!draft.exceeds_word_limit());
    }

    #[test]
    fn long_body_exceeds_limit() {
        let draft = EmailDraft {
            subject: "s".into(),
            body: "word ".repeat(MAX_EMAIL_WORDS + 1),
        };
        assert!(draft.exceeds_word_limit());
    }
}
