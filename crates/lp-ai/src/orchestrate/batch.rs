use std::collections::BTreeMap;

use lp_core::entities::Prospect;
use lp_core::enums::AiTask;
use lp_core::generated::{FallbackScore, ScoreResult};
use serde::Serialize;

use super::{TaskOutput, run};
use crate::models::{self, ModelSummary};
use crate::provider::{CompletionProvider, TokenUsage};
use crate::{parse, prompts};

/// One prospect's outcome in a scoring batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredProspect {
    pub prospect_id: String,
    /// The parsed score, or the fallback score when the item failed.
    pub result: ScoreResult,
    /// Why the item fell back; `None` on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoredProspect {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Ordered outcomes of scoring N prospects: always N items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchScore {
    pub items: Vec<ScoredProspect>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchScore {
    /// Fold per-item outcomes, in order, into a batch.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (String, Result<ScoreResult, FallbackScore>)>,
    {
        outcomes
            .into_iter()
            .fold(Self::default(), |mut batch, (prospect_id, outcome)| {
                let item = match outcome {
                    Ok(result) => {
                        batch.succeeded += 1;
                        ScoredProspect {
                            prospect_id,
                            result,
                            error: None,
                        }
                    }
                    Err(fallback) => {
                        batch.failed += 1;
                        ScoredProspect {
                            prospect_id,
                            result: fallback.as_score(),
                            error: Some(fallback.error),
                        }
                    }
                };
                batch.items.push(item);
                batch
            })
    }

    /// Successful scores keyed by prospect id. Fallbacks are left out so they
    /// never overwrite a stored score.
    #[must_use]
    pub fn scores_by_id(&self) -> BTreeMap<&str, &ScoreResult> {
        self.items
            .iter()
            .filter(|item| !item.is_fallback())
            .map(|item| (item.prospect_id.as_str(), &item.result))
            .collect()
    }
}

/// Score each prospect on the fast tier, one call at a time, in input order.
///
/// Never fails as a whole: a provider or parse failure on one prospect yields
/// the fallback score for that prospect and the batch continues.
pub async fn score_prospects<P: CompletionProvider>(
    provider: &P,
    prospects: &[Prospect],
) -> TaskOutput<BatchScore> {
    score_prospects_with_progress(provider, prospects, |_, _| {}).await
}

/// [`score_prospects`] with a callback after each item, for progress display.
pub async fn score_prospects_with_progress<P, F>(
    provider: &P,
    prospects: &[Prospect],
    mut on_item: F,
) -> TaskOutput<BatchScore>
where
    P: CompletionProvider,
    F: FnMut(&Prospect, &Result<ScoreResult, FallbackScore>),
{
    let mut outcomes = Vec::with_capacity(prospects.len());
    let mut usage: Option<TokenUsage> = None;

    for prospect in prospects {
        let outcome = match run(
            provider,
            AiTask::ProspectScoring,
            || prompts::prospect_score(prospect),
            parse::score,
        )
        .await
        {
            Ok(output) => {
                if let Some(item) = output.usage {
                    let total = usage.get_or_insert_with(TokenUsage::default);
                    total.input_tokens += item.input_tokens;
                    total.output_tokens += item.output_tokens;
                }
                Ok(output.value)
            }
            Err(err) => {
                tracing::warn!(prospect = %prospect.id, error = %err, "scoring failed, using fallback");
                Err(FallbackScore::new(err.to_string()))
            }
        };
        on_item(prospect, &outcome);
        outcomes.push((prospect.id.clone(), outcome));
    }

    TaskOutput {
        value: BatchScore::from_outcomes(outcomes),
        model: model_summary(),
        usage,
    }
}

fn model_summary() -> ModelSummary {
    models::model_for(AiTask::ProspectScoring).summary()
}
