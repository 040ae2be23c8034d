use clap::Subcommand;

/// Template commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TemplateCommands {
    /// Create a template.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        subject: Option<String>,
        /// email, linkedin, reddit, or facebook.
        #[arg(long, default_value = "email")]
        channel: String,
    },
    /// List templates.
    List {
        #[arg(long)]
        channel: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
