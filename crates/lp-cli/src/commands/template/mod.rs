mod create;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TemplateCommands;
use crate::context::AppContext;

/// Handle `launchpad template`.
pub async fn handle(
    action: &TemplateCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TemplateCommands::Create {
            name,
            body,
            subject,
            channel,
        } => create::run(name, body, subject.as_deref(), channel, ctx, flags).await,
        TemplateCommands::List { channel, limit } => {
            list::run(channel.as_deref(), *limit, ctx, flags).await
        }
    }
}
