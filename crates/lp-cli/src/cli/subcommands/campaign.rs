use clap::Subcommand;

/// Campaign commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CampaignCommands {
    /// Create a draft campaign.
    Create {
        #[arg(long)]
        name: String,
        /// What you are launching.
        #[arg(long)]
        product: String,
        /// Who buys it.
        #[arg(long)]
        buyer: String,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        geography: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Edit a draft campaign. Active campaigns are locked.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        product: Option<String>,
        #[arg(long)]
        buyer: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        geography: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List campaigns.
    List {
        /// Only active campaigns.
        #[arg(long)]
        active: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a campaign by ID.
    Get { id: String },
    /// Generate a launch brief and attach it to the campaign.
    Brief { id: String },
    /// Activate a campaign that has a brief.
    Activate { id: String },
    /// Delete a campaign.
    Delete { id: String },
}
