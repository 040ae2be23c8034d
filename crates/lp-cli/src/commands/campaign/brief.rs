use chrono::Utc;
use lp_ai::CompletionProvider;
use lp_ai::models::ModelSummary;
use lp_ai::orchestrate::generate_launch_brief;
use lp_core::entities::Campaign;
use lp_core::generated::LaunchBrief;
use lp_store::RecordStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct BriefResponse {
    campaign_id: String,
    brief: LaunchBrief,
    model: ModelSummary,
}

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let provider = ctx.ai()?;
    let spinner = Progress::spinner("Generating launch brief...");
    match generate(&provider, id, ctx).await {
        Ok(response) => {
            spinner.finish_clear();
            output(&response, flags.format)
        }
        Err(error) => {
            spinner.finish_err("launch brief failed");
            Err(error)
        }
    }
}

async fn generate<P: CompletionProvider>(
    provider: &P,
    id: &str,
    ctx: &mut AppContext,
) -> anyhow::Result<BriefResponse> {
    let mut campaign: Campaign = ctx.store.get(&ctx.owner_id, id)?;
    if campaign.is_locked() {
        anyhow::bail!(
            "campaign {id} is active and keeps its brief; create a new campaign to regenerate"
        );
    }

    let generated = generate_launch_brief(provider, &campaign.brief_request()).await?;
    campaign.attach_brief(generated.value.clone(), Utc::now())?;
    let campaign = ctx.store.update(campaign)?;

    Ok(BriefResponse {
        campaign_id: campaign.id,
        brief: generated.value,
        model: generated.model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::shared::testing::{StubProvider, seed_campaign};

    const REPLY: &str = r#"{
      "channels": [
        {"name": "Google Maps", "rank": 2, "rationale": "Every practice is listed"},
        {"name": "LinkedIn", "rank": 1, "rationale": "Office managers are active"}
      ],
      "first_week_plan": [{"day": "Day 1", "tasks": ["Build a list of 200 practices"]}],
      "key_insights": ["Compliance sells", "Managers buy", "Demos convert"]
    }"#;

    #[tokio::test]
    async fn attaches_sorted_brief() {
        let mut ctx = AppContext::for_tests();
        seed_campaign(&mut ctx, "cmp-00000001");

        let response = generate(&StubProvider::new(&[REPLY]), "cmp-00000001", &mut ctx)
            .await
            .unwrap();
        assert_eq!(response.brief.channels[0].name, "LinkedIn");

        let stored: Campaign = ctx.store.get("usr-test", "cmp-00000001").unwrap();
        let brief = stored.launch_brief.unwrap();
        assert_eq!(brief.channels.len(), 2);
        assert_eq!(brief.key_insights.len(), 3);
    }

    #[tokio::test]
    async fn locked_campaign_is_left_alone() {
        let mut ctx = AppContext::for_tests();
        let mut campaign = seed_campaign(&mut ctx, "cmp-00000001");
        generate(&StubProvider::new(&[REPLY]), "cmp-00000001", &mut ctx)
            .await
            .unwrap();
        campaign = ctx.store.get("usr-test", &campaign.id).unwrap();
        campaign.activate(Utc::now()).unwrap();
        ctx.store.update(campaign).unwrap();

        let provider = StubProvider::new(&[REPLY]);
        let err = generate(&provider, "cmp-00000001", &mut ctx)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("keeps its brief"));
    }

    #[tokio::test]
    async fn unparseable_reply_keeps_campaign_unchanged() {
        let mut ctx = AppContext::for_tests();
        seed_campaign(&mut ctx, "cmp-00000001");

        let result = generate(
            &StubProvider::new(&["I cannot help with that."]),
            "cmp-00000001",
            &mut ctx,
        )
        .await;
        assert!(result.is_err());
        let stored: Campaign = ctx.store.get("usr-test", "cmp-00000001").unwrap();
        assert!(stored.launch_brief.is_none());
    }

    #[tokio::test]
    async fn other_owner_campaign_is_not_found() {
        let mut ctx = AppContext::for_tests();
        seed_campaign(&mut ctx, "cmp-00000001");
        ctx.owner_id = "usr-other".into();

        let err = generate(&StubProvider::new(&[REPLY]), "cmp-00000001", &mut ctx)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
