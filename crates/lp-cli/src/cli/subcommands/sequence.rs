use clap::Subcommand;

/// Sequence commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SequenceCommands {
    /// Create a follow-up sequence from templates.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        campaign: Option<String>,
        /// `<template-id>:<delay-days>[:<channel>]`, once per step in order.
        #[arg(long = "step", required = true)]
        steps: Vec<String>,
    },
    /// List sequences.
    List {
        #[arg(long)]
        campaign: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
