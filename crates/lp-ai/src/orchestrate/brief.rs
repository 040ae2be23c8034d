use lp_core::enums::AiTask;
use lp_core::generated::{BriefRequest, LaunchBrief};

use super::{TaskOutput, run};
use crate::error::AiError;
use crate::provider::CompletionProvider;
use crate::{parse, prompts};

/// Generate a launch brief on the balanced tier.
///
/// # Errors
///
/// [`AiError::InvalidInput`] when the product description or target buyer is
/// blank (checked before any prompt is built); otherwise the provider or
/// parse failure.
pub async fn generate_launch_brief<P: CompletionProvider>(
    provider: &P,
    request: &BriefRequest,
) -> Result<TaskOutput<LaunchBrief>, AiError> {
    request.validate()?;
    run(
        provider,
        AiTask::LaunchBrief,
        || prompts::launch_brief(request),
        parse::launch_brief,
    )
    .await
}
