use std::time::Duration;

use async_trait::async_trait;
use derive_more::Display;
use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    entities::github::{GithubRepoPayload, GithubUserPayload},
    settings::AppConfig,
};

const USER_AGENT: &str = concat!("cognito-portfolio/", env!("CARGO_PKG_VERSION"));
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const REPOS_PER_PAGE: &str = "100";

#[derive(Debug, Display)]
pub enum GithubError {
    #[display("HTTP client unavailable")]
    Unavailable,

    #[display("Invalid GitHub API URL: {_0}")]
    InvalidUrl(String),

    #[display("Request failed: {_0}")]
    Request(String),

    #[display("Unexpected status: {_0}")]
    Status(u16),

    #[display("Undecodable response: {_0}")]
    Decode(String),
}

impl std::error::Error for GithubError {}

/// The two read-only GitHub endpoints the site displays.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GithubApi: Send + Sync {
    async fn fetch_profile(&self) -> Result<GithubUserPayload, GithubError>;
    async fn fetch_repositories(&self) -> Result<Vec<GithubRepoPayload>, GithubError>;
}

pub struct ReqwestGithubClient {
    client: Option<Client>,
    api_base: Result<Url, String>,
    username: String,
}

impl ReqwestGithubClient {
    pub fn new(api_url: &str, username: &str, timeout: Duration) -> Self {
        // A client that cannot be built leaves the site on fallback data
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| tracing::error!("GitHub HTTP client unavailable: {}", e))
            .ok();

        let api_base = Url::parse(api_url)
            .map(|mut url| {
                if !url.path().ends_with('/') {
                    let path = format!("{}/", url.path());
                    url.set_path(&path);
                }
                url
            })
            .map_err(|e| format!("{api_url}: {e}"));

        ReqwestGithubClient {
            client,
            api_base,
            username: username.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.github_api_url,
            &config.github_username,
            Duration::from_secs(config.github_timeout_secs),
        )
    }

    fn endpoint(&self, path: &str) -> Result<Url, GithubError> {
        let base = self
            .api_base
            .as_ref()
            .map_err(|e| GithubError::InvalidUrl(e.clone()))?;
        let user = urlencoding::encode(&self.username);

        base.join(&format!("users/{}{}", user, path))
            .map_err(|e| GithubError::InvalidUrl(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GithubError> {
        let client = self.client.as_ref().ok_or(GithubError::Unavailable)?;

        let response = client
            .get(url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .map_err(|e| GithubError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GithubError::Decode(e.to_string()))
    }
}

#[async_trait]
impl GithubApi for ReqwestGithubClient {
    async fn fetch_profile(&self) -> Result<GithubUserPayload, GithubError> {
        let url = self.endpoint("")?;
        self.get_json(url).await
    }

    async fn fetch_repositories(&self) -> Result<Vec<GithubRepoPayload>, GithubError> {
        let mut url = self.endpoint("/repos")?;
        url.query_pairs_mut()
            .append_pair("per_page", REPOS_PER_PAGE)
            .append_pair("sort", "updated");
        self.get_json(url).await
    }
}
