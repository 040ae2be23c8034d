mod add;
mod delete;
mod import;
mod list;
mod score;
mod similar;
mod update;

use lp_core::entities::ProspectInput;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProspectCommands;
use crate::context::AppContext;

/// Handle `launchpad prospect`.
pub async fn handle(
    action: &ProspectCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProspectCommands::Import { file, campaign } => {
            import::run(file, campaign.as_deref(), ctx, flags).await
        }
        ProspectCommands::Add {
            email,
            name,
            company,
            title,
            phone,
            linkedin,
            website,
            notes,
            campaign,
        } => {
            let input = ProspectInput {
                email: email.clone(),
                name: name.clone(),
                company: company.clone(),
                title: title.clone(),
                phone: phone.clone(),
                linkedin_url: linkedin.clone(),
                website: website.clone(),
                notes: notes.clone(),
            };
            add::run(input, campaign.as_deref(), ctx, flags).await
        }
        ProspectCommands::Update {
            id,
            status,
            name,
            company,
            title,
            phone,
            notes,
        } => {
            let edits = update::ProspectEdits {
                status: status.as_deref(),
                name: name.as_deref(),
                company: company.as_deref(),
                title: title.as_deref(),
                phone: phone.as_deref(),
                notes: notes.as_deref(),
            };
            update::run(id, edits, ctx, flags).await
        }
        ProspectCommands::Delete { id } => delete::run(id, ctx, flags).await,
        ProspectCommands::List {
            campaign,
            status,
            limit,
        } => list::run(campaign.as_deref(), status.as_deref(), *limit, ctx, flags).await,
        ProspectCommands::Score { ids, campaign } => {
            score::run(ids, campaign.as_deref(), ctx, flags).await
        }
        ProspectCommands::Similar { ids } => similar::run(ids, ctx, flags).await,
    }
}
