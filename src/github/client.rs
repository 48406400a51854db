//! Paginated listing helpers over the GitHub REST v3 API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::types::{ErrorEnvelope, OrgEntry, OrgSummary, RepoEntry, RepoSummary};
use crate::utils::error::{Error, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number};

pub const DEFAULT_PAGE_SIZE: usize = 50;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const ACCEPT_HEADER: &str = "vnd.github.v3+json";

pub struct GithubClientBuilder {
    token: String,
    base_url: String,
    timeout: Duration,
}

impl GithubClientBuilder {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different host, e.g. a mock server in tests.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<GithubClient> {
        validate_non_empty_string("token", &self.token)?;
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;
        Ok(GithubClient {
            http,
            token: self.token,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// GitHub API client for the listing endpoints.
///
/// All requests carry the v3 Accept header and token authorization and
/// share a 10 second client-side timeout. Failures are never retried.
pub struct GithubClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        GithubClientBuilder::new(token).build()
    }

    pub fn builder(token: impl Into<String>) -> GithubClientBuilder {
        GithubClientBuilder::new(token)
    }

    /// List the organizations the authenticated user belongs to.
    pub async fn list_organizations(&self, page_size: usize) -> Result<Vec<OrgSummary>> {
        validate_positive_number("page_size", page_size, 1)?;
        self.fetch_all::<OrgEntry, OrgSummary>("/user/orgs", &[], page_size)
            .await
            .inspect_err(|e| tracing::error!("error listing GitHub organizations: {e}"))
    }

    /// List the authenticated user's repositories, sorted by full name.
    pub async fn list_user_repos(&self, page_size: usize) -> Result<Vec<RepoSummary>> {
        validate_positive_number("page_size", page_size, 1)?;
        self.fetch_all::<RepoEntry, RepoSummary>("/user/repos", REPO_FILTERS, page_size)
            .await
            .inspect_err(|e| tracing::error!("error listing GitHub repositories for user: {e}"))
    }

    /// List an organization's repositories, sorted by full name.
    pub async fn list_org_repos(&self, org: &str, page_size: usize) -> Result<Vec<RepoSummary>> {
        validate_non_empty_string("org", org)?;
        validate_positive_number("page_size", page_size, 1)?;
        let path = format!("/orgs/{org}/repos");
        self.fetch_all::<RepoEntry, RepoSummary>(&path, REPO_FILTERS, page_size)
            .await
            .inspect_err(|e| tracing::error!("error listing GitHub repositories for org: {e}"))
    }

    /// Fetch pages sequentially until one comes back short.
    ///
    /// A page with exactly `page_size` entries triggers exactly one further
    /// request; results concatenate in request order.
    async fn fetch_all<E, T>(
        &self,
        path: &str,
        filters: &[(&str, &str)],
        page_size: usize,
    ) -> Result<Vec<T>>
    where
        E: DeserializeOwned,
        T: From<E>,
    {
        let mut all = Vec::new();
        let mut page = 1u32;
        loop {
            let entries: Vec<E> = self.get_page(path, filters, page, page_size).await?;
            let count = entries.len();
            all.extend(entries.into_iter().map(T::from));
            tracing::debug!(path, page, count, total = all.len(), "fetched page");
            if count < page_size {
                break;
            }
            page += 1;
        }
        Ok(all)
    }

    async fn get_page<E: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(&str, &str)],
        page: u32,
        page_size: usize,
    ) -> Result<Vec<E>> {
        let url = format!("{}{}", self.base_url, path);
        let page = page.to_string();
        let per_page = page_size.to_string();
        let mut query: Vec<(&str, &str)> = vec![("page", &page), ("per_page", &per_page)];
        query.extend_from_slice(filters);

        let response = self
            .http
            .get(&url)
            .header("Accept", ACCEPT_HEADER)
            .header("Authorization", format!("token {}", self.token))
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let envelope: ErrorEnvelope = response.json().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: envelope.message,
            });
        }

        Ok(response.json().await?)
    }
}

const REPO_FILTERS: &[(&str, &str)] = &[("sort", "full_name"), ("type", "all")];
