use chrono::Utc;
use lp_core::entities::{Campaign, Prospect, ProspectInput};
use lp_core::enums::ActivityType;
use lp_core::ids::{PREFIX_PROSPECT, gen_id};
use lp_core::import::validate_import;
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    input: ProspectInput,
    campaign: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let prospect = add(input, campaign, ctx)?;
    output(&prospect, flags.format)
}

/// Create one prospect, applying the same checks as a CSV row.
fn add(input: ProspectInput, campaign: Option<&str>, ctx: &mut AppContext) -> anyhow::Result<Prospect> {
    if let Some(id) = campaign {
        ctx.store.get::<Campaign>(&ctx.owner_id, id)?;
    }

    let input = ProspectInput {
        email: input.email.trim().to_string(),
        ..input
    };
    let (mut valid, report) = validate_import(vec![input]);
    let Some(input) = valid.pop() else {
        anyhow::bail!("{}", report.errors.join("; "));
    };

    let email = input.email.to_lowercase();
    let duplicate = ctx
        .store
        .list_where(&ctx.owner_id, |p: &Prospect| p.email.to_lowercase() == email);
    if !duplicate.is_empty() {
        anyhow::bail!("{}: prospect already exists", input.email);
    }

    let prospect = Prospect::new(
        gen_id(PREFIX_PROSPECT)?,
        ctx.owner_id.clone(),
        campaign.map(ToString::to_string),
        input,
        Utc::now(),
    );
    let description = format!("Added {}", prospect.display_name());
    let prospect = ctx.store.create(prospect)?;
    ctx.log_activity(ActivityType::ProspectAdded, "prospect", &prospect.id, description)?;
    tracing::info!(prospect = %prospect.id, "prospect added");
    Ok(prospect)
}

#[cfg(test)]
mod tests {
    use lp_core::entities::ActivityLog;
    use lp_core::enums::ProspectStatus;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::shared::testing::{seed_campaign, seed_prospect};

    fn input(email: &str) -> ProspectInput {
        ProspectInput {
            email: email.into(),
            name: Some("Lee Park".into()),
            website: Some("https://harbor.example".into()),
            ..ProspectInput::default()
        }
    }

    #[test]
    fn adds_new_prospect_and_logs_it() {
        let mut ctx = AppContext::for_tests();
        seed_campaign(&mut ctx, "cmp-00000001");

        let prospect = add(input(" lee@harbor.example "), Some("cmp-00000001"), &mut ctx).unwrap();
        assert!(prospect.id.starts_with("prs-"));
        assert_eq!(prospect.email, "lee@harbor.example");
        assert_eq!(prospect.status, ProspectStatus::New);
        assert_eq!(prospect.campaign_id.as_deref(), Some("cmp-00000001"));

        let log: Vec<ActivityLog> = ctx.store.list("usr-test");
        assert_eq!(log[0].activity_type, ActivityType::ProspectAdded);
        assert_eq!(log[0].description, "Added Lee Park");
    }

    #[test]
    fn duplicate_email_is_rejected_case_insensitively() {
        let mut ctx = AppContext::for_tests();
        seed_prospect(&mut ctx, "prs-00000001", "lee@harbor.example");

        let err = add(input("LEE@harbor.example"), None, &mut ctx).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(ctx.store.list::<Prospect>("usr-test").len(), 1);
    }

    #[test]
    fn invalid_fields_are_rejected() {
        let mut ctx = AppContext::for_tests();
        let err = add(input("not-an-email"), None, &mut ctx).unwrap_err();
        assert!(err.to_string().contains("invalid email"));

        let mut bad_url = input("lee@harbor.example");
        bad_url.website = Some("harbor dot example".into());
        let err = add(bad_url, None, &mut ctx).unwrap_err();
        assert!(err.to_string().contains("invalid website URL"));
        assert!(ctx.store.list::<Prospect>("usr-test").is_empty());
    }
}
