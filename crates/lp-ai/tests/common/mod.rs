use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use lp_ai::provider::{Completion, CompletionProvider, CompletionRequest};
use lp_ai::ProviderError;
use lp_core::entities::{Prospect, ProspectInput};

/// Replays a fixed queue of replies and records every request it receives.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<Completion, ProviderError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<Completion, ProviderError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(text(t))).collect())
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ProviderError::EmptyCompletion))
    }
}

pub fn text(body: &str) -> Completion {
    Completion {
        text: body.to_string(),
        model: "scripted".to_string(),
        usage: None,
    }
}

pub fn prospect(n: usize) -> Prospect {
    Prospect::new(
        format!("prs-{n:08x}"),
        "usr-test".into(),
        None,
        ProspectInput {
            email: format!("lead{n}@clinic.example"),
            name: Some(format!("Lead {n}")),
            company: Some("Bright Smiles".into()),
            ..ProspectInput::default()
        },
        Utc::now(),
    )
}
