use lp_core::entities::Prospect;

use super::{Prompt, or_placeholder};

const SCHEMA_HINT: &str = r#"{
  "score": <number from 0 to 100>,
  "reasoning": "<two or three sentences explaining the score>"
}"#;

const MISSING: &str = "Not provided";

/// Lead-quality score for one prospect.
#[must_use]
pub fn prospect_score(prospect: &Prospect) -> Prompt {
    let body = format!(
        "You score sales leads. Give this prospect a score from 0 to 100 using only the information below.

Weigh:
- How complete the contact details are (name, email, company, title, phone, LinkedIn)
- Quality signals (a company email domain, a relevant job title, company details)
- Engagement potential (LinkedIn profile, website, notes)

PROSPECT
- Name: {name}
- Email: {email}
- Company: {company}
- Title: {title}
- Phone: {phone}
- LinkedIn: {linkedin}
- Website: {website}
- Notes: {notes}
- Current status: {status}",
        name = or_placeholder(prospect.name.as_deref(), MISSING),
        email = prospect.email.trim(),
        company = or_placeholder(prospect.company.as_deref(), MISSING),
        title = or_placeholder(prospect.title.as_deref(), MISSING),
        phone = or_placeholder(prospect.phone.as_deref(), MISSING),
        linkedin = or_placeholder(prospect.linkedin_url.as_deref(), MISSING),
        website = or_placeholder(prospect.website.as_deref(), MISSING),
        notes = or_placeholder(prospect.notes.as_deref(), MISSING),
        status = prospect.status,
    );
    Prompt::assemble(&body, SCHEMA_HINT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lp_core::entities::ProspectInput;

    fn prospect() -> Prospect {
        Prospect::new(
            "prs-deadbeef".into(),
            "usr-owner-42".into(),
            Some("cmp-cafef00d".into()),
            ProspectInput {
                email: "dana@brightsmiles.example".into(),
                name: Some("Dana Ruiz".into()),
                company: Some("Bright Smiles".into()),
                ..ProspectInput::default()
            },
            Utc::now(),
        )
    }

    #[test]
    fn includes_known_fields_and_placeholders() {
        let prompt = prospect_score(&prospect());
        assert!(prompt.instruction.contains("- Name: Dana Ruiz"));
        assert!(prompt.instruction.contains("- Company: Bright Smiles"));
        assert!(prompt.instruction.contains("- Title: Not provided"));
        assert!(prompt.instruction.contains("- Current status: new"));
        assert!(prompt.instruction.contains("Respond with ONLY a JSON object."));
    }

    #[test]
    fn never_leaks_identifiers() {
        let prompt = prospect_score(&prospect());
        for id in ["prs-deadbeef", "usr-owner-42", "cmp-cafef00d"] {
            assert!(!prompt.instruction.contains(id));
        }
    }
}
