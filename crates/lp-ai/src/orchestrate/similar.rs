use lp_core::entities::Prospect;
use lp_core::enums::AiTask;
use lp_core::generated::SimilarityAnalysis;

use super::{TaskOutput, run};
use crate::error::AiError;
use crate::provider::CompletionProvider;
use crate::{parse, prompts};

/// Find what a prospect set has in common and where to find more like it.
///
/// # Errors
///
/// [`AiError::InvalidInput`] for an empty set; otherwise the provider or
/// parse failure.
pub async fn find_similar<P: CompletionProvider>(
    provider: &P,
    prospects: &[Prospect],
) -> Result<TaskOutput<SimilarityAnalysis>, AiError> {
    if prospects.is_empty() {
        return Err(AiError::InvalidInput(
            "at least one prospect is required".into(),
        ));
    }
    run(
        provider,
        AiTask::ProspectSimilarity,
        || prompts::find_similar(prospects),
        parse::similarity,
    )
    .await
}
