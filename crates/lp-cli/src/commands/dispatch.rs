use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Models { action } => commands::models::handle(&action, ctx, flags).await,
        Commands::Campaign { action } => commands::campaign::handle(&action, ctx, flags).await,
        Commands::Prospect { action } => commands::prospect::handle(&action, ctx, flags).await,
        Commands::Outreach { action } => commands::outreach::handle(&action, ctx, flags).await,
        Commands::Template { action } => commands::template::handle(&action, ctx, flags).await,
        Commands::Sequence { action } => commands::sequence::handle(&action, ctx, flags).await,
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
