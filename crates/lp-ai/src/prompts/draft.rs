use lp_core::entities::Prospect;
use lp_core::generated::MAX_EMAIL_WORDS;

use super::{Prompt, or_placeholder};

const SCHEMA_HINT: &str = r#"{
  "subject": "<email subject>",
  "body": "<email body>"
}"#;

/// Personalized cold email for one prospect.
#[must_use]
pub fn email_draft(prospect: &Prospect) -> Prompt {
    let body = format!(
        "You write cold emails that get replies. Draft a personalized first-touch email to this prospect.

PROSPECT
- Name: {name}
- Email: {email}
- Company: {company}
- Title: {title}
- LinkedIn: {linkedin}
- Notes: {notes}

The email must:
1. Have a subject line worth opening
2. Open with something specific to this person
3. State the value proposition plainly
4. End with exactly one concrete call to action
5. Stay under {MAX_EMAIL_WORDS} words",
        name = or_placeholder(prospect.name.as_deref(), "Unknown"),
        email = prospect.email.trim(),
        company = or_placeholder(prospect.company.as_deref(), "Unknown"),
        title = or_placeholder(prospect.title.as_deref(), "Unknown"),
        linkedin = or_placeholder(prospect.linkedin_url.as_deref(), "Not provided"),
        notes = or_placeholder(prospect.notes.as_deref(), "None"),
    );
    Prompt::assemble(&body, SCHEMA_HINT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lp_core::entities::ProspectInput;

    #[test]
    fn draft_prompt_defaults_and_limits() {
        let prospect = Prospect::new(
            "prs-1".into(),
            "usr-1".into(),
            None,
            ProspectInput {
                email: "dana@brightsmiles.example".into(),
                company: Some("Bright Smiles".into()),
                ..ProspectInput::default()
            },
            Utc::now(),
        );
        let prompt = email_draft(&prospect);
        assert!(prompt.instruction.contains("- Name: Unknown"));
        assert!(prompt.instruction.contains("- Company: Bright Smiles"));
        assert!(prompt.instruction.contains("- Notes: None"));
        assert!(prompt.instruction.contains("under 150 words"));
        assert!(prompt.instruction.contains("exactly one concrete call to action"));
        assert!(prompt.instruction.contains("Respond with ONLY a JSON object."));
    }
}
