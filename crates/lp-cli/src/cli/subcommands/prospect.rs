use clap::Subcommand;

/// Prospect commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProspectCommands {
    /// Import prospects from a CSV file.
    Import {
        /// CSV file with an email column.
        file: String,
        /// Attach imported prospects to this campaign.
        #[arg(long)]
        campaign: Option<String>,
    },
    /// Add one prospect by hand.
    Add {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        campaign: Option<String>,
    },
    /// Edit a prospect or move it along the pipeline.
    Update {
        id: String,
        /// New pipeline status (contacted, responded, converted, not_interested).
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a prospect.
    Delete { id: String },
    /// List prospects.
    List {
        #[arg(long)]
        campaign: Option<String>,
        /// Filter by status (new, contacted, responded, converted, not_interested).
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Score prospects for lead quality.
    Score {
        /// Prospect IDs to score.
        ids: Vec<String>,
        /// Score every prospect in this campaign instead.
        #[arg(long, conflicts_with = "ids")]
        campaign: Option<String>,
    },
    /// Find where to source more prospects like these.
    Similar {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}
