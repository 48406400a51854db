pub mod client;
pub mod types;

pub use client::{GithubClient, GithubClientBuilder, DEFAULT_PAGE_SIZE};
pub use types::{OrgSummary, RepoSummary};
