use lp_core::enums::AiTask;
use serde::Serialize;

use crate::models::{self, ModelSummary, PROBE_MAX_TOKENS};
use crate::provider::{CompletionProvider, CompletionRequest};

const PROBE_INSTRUCTION: &str = "Reply with the single word OK.";

/// Result of a minimal round trip to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    pub model: ModelSummary,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Send a tiny completion to the launch-brief model and report what happened.
pub async fn probe<P: CompletionProvider>(provider: &P) -> ProbeOutcome {
    let descriptor = models::model_for(AiTask::LaunchBrief);
    let request = CompletionRequest {
        model: descriptor.identifier.to_string(),
        instruction: PROBE_INSTRUCTION.to_string(),
        max_tokens: PROBE_MAX_TOKENS,
    };
    match provider.complete(&request).await {
        Ok(completion) => ProbeOutcome {
            model: descriptor.summary(),
            ok: true,
            reply: Some(completion.text.trim().to_string()),
            error: None,
        },
        Err(err) => {
            tracing::warn!(error = %err, "provider probe failed");
            ProbeOutcome {
                model: descriptor.summary(),
                ok: false,
                reply: None,
                error: Some(err.to_string()),
            }
        }
    }
}
