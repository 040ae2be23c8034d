//! Test doubles for command handlers.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use lp_ai::{Completion, CompletionProvider, CompletionRequest, ProviderError};
use lp_core::entities::{Campaign, Prospect, ProspectInput};
use lp_core::generated::BriefRequest;
use lp_mail::{MailError, Mailer, OutboundEmail, SentEmail};
use lp_store::RecordStore;

use crate::context::AppContext;

/// Replies with queued texts in order.
pub struct StubProvider {
    replies: Mutex<VecDeque<String>>,
}

impl StubProvider {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| (*r).to_string()).collect()),
        }
    }
}

impl CompletionProvider for StubProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        let text = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(ProviderError::EmptyCompletion)?;
        Ok(Completion {
            text,
            model: request.model.clone(),
            usage: None,
        })
    }
}

/// Records every email and answers with a fixed id.
#[derive(Default)]
pub struct StubMailer {
    pub sent: Mutex<Vec<OutboundEmail>>,
    pub fail: bool,
}

impl Mailer for StubMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, MailError> {
        if self.fail {
            return Err(MailError::Api {
                status: 422,
                message: "Invalid `to` field.".into(),
            });
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(SentEmail {
            id: "msg-0001".into(),
        })
    }
}

pub fn seed_prospect(ctx: &mut AppContext, id: &str, email: &str) -> Prospect {
    let prospect = Prospect::new(
        id.into(),
        ctx.owner_id.clone(),
        None,
        ProspectInput {
            email: email.into(),
            name: Some("Dana Ruiz".into()),
            company: Some("Bright Smiles".into()),
            ..ProspectInput::default()
        },
        Utc::now(),
    );
    ctx.store.create(prospect).unwrap()
}

pub fn seed_campaign(ctx: &mut AppContext, id: &str) -> Campaign {
    let campaign = Campaign::draft(
        id.into(),
        ctx.owner_id.clone(),
        "Dental launch".into(),
        BriefRequest {
            product_description: "HIPAA-compliant dental software".into(),
            target_buyer: "dental office managers".into(),
            price_point: Some("$299/mo".into()),
            geography: Some("US".into()),
        },
        Utc::now(),
    );
    ctx.store.create(campaign).unwrap()
}
