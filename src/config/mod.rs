use clap::{Parser, Subcommand};

use crate::github::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Parser)]
#[command(name = "platform-utils")]
#[command(about = "Listing helpers for the platform's GitHub integration")]
pub struct CliConfig {
    #[arg(long, help = "GitHub OAuth token; falls back to GITHUB_TOKEN")]
    pub token: Option<String>,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List organizations the authenticated user belongs to
    Orgs,
    /// List the authenticated user's repositories
    UserRepos,
    /// List repositories in an organization
    OrgRepos { org: String },
}

impl CliConfig {
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
    }
}
