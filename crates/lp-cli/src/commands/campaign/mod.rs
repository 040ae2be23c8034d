mod activate;
mod brief;
mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CampaignCommands;
use crate::context::AppContext;

/// Handle `launchpad campaign`.
pub async fn handle(
    action: &CampaignCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CampaignCommands::Create {
            name,
            product,
            buyer,
            price,
            geography,
            description,
        } => {
            create::run(
                create::CreateArgs {
                    name,
                    product,
                    buyer,
                    price: price.as_deref(),
                    geography: geography.as_deref(),
                    description: description.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        CampaignCommands::Update {
            id,
            name,
            product,
            buyer,
            price,
            geography,
            description,
        } => {
            let edits = update::CampaignEdits {
                name: name.as_deref(),
                product: product.as_deref(),
                buyer: buyer.as_deref(),
                price: price.as_deref(),
                geography: geography.as_deref(),
                description: description.as_deref(),
            };
            update::run(id, edits, ctx, flags).await
        }
        CampaignCommands::List { active, limit } => list::run(*active, *limit, ctx, flags).await,
        CampaignCommands::Get { id } => get::run(id, ctx, flags).await,
        CampaignCommands::Brief { id } => brief::run(id, ctx, flags).await,
        CampaignCommands::Activate { id } => activate::run(id, ctx, flags).await,
        CampaignCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
