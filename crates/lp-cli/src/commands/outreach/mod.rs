mod draft;
mod list;
mod send;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OutreachCommands;
use crate::context::AppContext;

/// Handle `launchpad outreach`.
pub async fn handle(
    action: &OutreachCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OutreachCommands::Draft { prospect, campaign } => {
            draft::run(prospect, campaign.as_deref(), ctx, flags).await
        }
        OutreachCommands::Send {
            prospect,
            template,
            subject,
            body,
            schedule,
            campaign,
        } => {
            send::run(
                send::SendArgs {
                    prospect,
                    template: template.as_deref(),
                    subject: subject.as_deref(),
                    body: body.as_deref(),
                    schedule: schedule.as_deref(),
                    campaign: campaign.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        OutreachCommands::Update { id, status } => update::run(id, status, ctx, flags).await,
        OutreachCommands::List {
            prospect,
            status,
            limit,
        } => list::run(prospect.as_deref(), status.as_deref(), *limit, ctx, flags).await,
    }
}
