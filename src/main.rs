use clap::Parser;
use platform_utils::config::{CliConfig, Command};
use platform_utils::utils::logger;
use platform_utils::GithubClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting platform-utils CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let Some(token) = config.resolve_token() else {
        eprintln!("No GitHub token provided; pass --token or set GITHUB_TOKEN");
        std::process::exit(1);
    };

    let client = GithubClient::new(token)?;
    match &config.command {
        Command::Orgs => {
            let orgs = client.list_organizations(config.page_size).await?;
            tracing::info!("Listed {} organizations", orgs.len());
            print_json(&orgs)?;
        }
        Command::UserRepos => {
            let repos = client.list_user_repos(config.page_size).await?;
            tracing::info!("Listed {} repositories", repos.len());
            print_json(&repos)?;
        }
        Command::OrgRepos { org } => {
            let repos = client.list_org_repos(org, config.page_size).await?;
            tracing::info!("Listed {} repositories for {}", repos.len(), org);
            print_json(&repos)?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
