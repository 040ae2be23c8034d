use lp_core::entities::Prospect;
use lp_core::enums::AiTask;
use lp_core::generated::EmailDraft;

use super::{TaskOutput, run};
use crate::error::AiError;
use crate::provider::CompletionProvider;
use crate::{parse, prompts};

/// Draft a cold email for one prospect.
///
/// # Errors
///
/// [`AiError::InvalidInput`] when the prospect has no email address;
/// otherwise the provider or parse failure.
pub async fn draft_email<P: CompletionProvider>(
    provider: &P,
    prospect: &Prospect,
) -> Result<TaskOutput<EmailDraft>, AiError> {
    if prospect.email.trim().is_empty() {
        return Err(AiError::InvalidInput(format!(
            "prospect {} has no email address",
            prospect.id
        )));
    }
    run(
        provider,
        AiTask::EmailDrafting,
        || prompts::email_draft(prospect),
        parse::email_draft,
    )
    .await
}
