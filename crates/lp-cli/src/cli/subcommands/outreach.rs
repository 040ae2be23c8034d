use clap::Subcommand;

/// Outreach commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OutreachCommands {
    /// Draft a cold email for a prospect and save it.
    Draft {
        prospect: String,
        #[arg(long)]
        campaign: Option<String>,
    },
    /// Send an email now, or schedule it.
    Send {
        prospect: String,
        /// Fill subject and body from this template when not given.
        #[arg(long)]
        template: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        body: Option<String>,
        /// RFC 3339 time to deliver at instead of now.
        #[arg(long)]
        schedule: Option<String>,
        #[arg(long)]
        campaign: Option<String>,
    },
    /// Record delivery progress reported by the mail provider or a reply.
    Update {
        id: String,
        /// delivered, opened, replied, or bounced.
        #[arg(long)]
        status: String,
    },
    /// List outreach.
    List {
        #[arg(long)]
        prospect: Option<String>,
        /// Filter by status (draft, scheduled, sent, ...).
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
