use clap::Subcommand;

/// Model registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModelsCommands {
    /// List every registered model.
    List,
    /// Show one tier (fast, balanced, deep; or haiku, sonnet, opus).
    Describe { tier: String },
    /// Verify the API key with a minimal completion.
    Check,
}
