//! # lp-ai
//!
//! AI response orchestration for LaunchPad: the static model registry, prompt
//! builders, tolerant response parsing with schema validation, and the task
//! orchestrators that tie them to an injected completion provider.

pub mod error;
pub mod models;
pub mod orchestrate;
pub mod parse;
pub mod prompts;
pub mod provider;

pub use error::{AiError, ParseError, ProviderError};
pub use orchestrate::{BatchScore, TaskOutput};
pub use provider::{AnthropicClient, Completion, CompletionProvider, CompletionRequest};
