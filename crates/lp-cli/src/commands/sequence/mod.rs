mod create;
mod list;

use lp_core::entities::Sequence;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SequenceCommands;
use crate::context::AppContext;

/// A sequence with the day offset at which each step fires.
#[derive(Debug, Serialize)]
struct SequenceView {
    #[serde(flatten)]
    sequence: Sequence,
    cumulative_delays: Vec<u32>,
}

impl From<Sequence> for SequenceView {
    fn from(sequence: Sequence) -> Self {
        let cumulative_delays = sequence.cumulative_delays();
        Self {
            sequence,
            cumulative_delays,
        }
    }
}

/// Handle `launchpad sequence`.
pub async fn handle(
    action: &SequenceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SequenceCommands::Create {
            name,
            campaign,
            steps,
        } => create::run(name, campaign.as_deref(), steps, ctx, flags).await,
        SequenceCommands::List { campaign, limit } => {
            list::run(campaign.as_deref(), *limit, ctx, flags).await
        }
    }
}
