//! Completion provider seam.
//!
//! Orchestrators never construct a client themselves; the caller injects any
//! [`CompletionProvider`] per invocation. [`AnthropicClient`] is the production
//! implementation.

mod anthropic;
mod http;

pub use anthropic::AnthropicClient;

use std::future::Future;

use serde::Serialize;

use crate::error::ProviderError;

/// One single-turn completion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    /// Concrete model identifier from the registry.
    pub model: String,
    /// Full instruction text sent as the user turn.
    pub instruction: String,
    pub max_tokens: u32,
}

/// Token counts reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Free-text reply to a [`CompletionRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub text: String,
    /// Model that actually answered, as reported by the provider.
    pub model: String,
    pub usage: Option<TokenUsage>,
}

/// A hosted language model reachable with one request/response round trip.
pub trait CompletionProvider {
    /// Send one instruction and wait for the whole reply.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<Completion, ProviderError>> + Send;
}
