use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CampaignCommands, ModelsCommands, OutreachCommands, ProspectCommands, SequenceCommands,
    TemplateCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Model registry and provider checks.
    Models {
        #[command(subcommand)]
        action: ModelsCommands,
    },
    /// Campaigns and launch briefs.
    Campaign {
        #[command(subcommand)]
        action: CampaignCommands,
    },
    /// Prospects: import, scoring, lookalikes.
    Prospect {
        #[command(subcommand)]
        action: ProspectCommands,
    },
    /// Outreach drafting and delivery.
    Outreach {
        #[command(subcommand)]
        action: OutreachCommands,
    },
    /// Message templates.
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },
    /// Multi-step follow-up sequences.
    Sequence {
        #[command(subcommand)]
        action: SequenceCommands,
    },
    /// Headline numbers across campaigns, prospects, and outreach.
    Dashboard(DashboardArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `launchpad dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Also list top templates and upcoming scheduled outreach.
    #[arg(long)]
    pub detail: bool,
}

/// Arguments for `launchpad schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (omit to list all names).
    pub type_name: Option<String>,
}
