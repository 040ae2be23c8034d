use lp_ai::CompletionProvider;
use lp_ai::TaskOutput;
use lp_ai::orchestrate::find_similar;
use lp_core::entities::Prospect;
use lp_core::generated::SimilarityAnalysis;
use lp_store::RecordStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(ids: &[String], ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let provider = ctx.ai()?;
    let spinner = Progress::spinner("Analyzing prospects...");
    let result = analyze(&provider, ids, ctx).await;
    spinner.finish_clear();
    output(&result?, flags.format)
}

async fn analyze<P: CompletionProvider>(
    provider: &P,
    ids: &[String],
    ctx: &AppContext,
) -> anyhow::Result<TaskOutput<SimilarityAnalysis>> {
    let prospects = ids
        .iter()
        .map(|id| ctx.store.get::<Prospect>(&ctx.owner_id, id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(find_similar(provider, &prospects).await?)
}
