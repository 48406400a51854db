pub mod github;
pub mod influx;
pub mod schema;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use github::{GithubClient, OrgSummary, RepoSummary};
pub use influx::{InfluxConfig, InfluxDb};
pub use schema::{Field, Schema, ValidationErrors};
pub use utils::error::{Error, Result};
