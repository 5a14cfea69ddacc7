//! GitHub Releases API source
//!
//! Fetches a single release by tag:
//! `GET {api_url}/repos/{owner}/{repo}/releases/tags/{tag}`.
//!
//! ## Authentication
//!
//! Uses the token found in the environment variable named by
//! `github.token_env` (default `GITHUB_TOKEN`). Without a token requests are
//! sent unauthenticated and are subject to a much lower rate limit.

use std::time::Duration;

use chronicle_core::config::GitHubConfig;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::error::{ReleaseError, Result};
use crate::traits::ReleaseSource;

const USER_AGENT: &str = concat!("chronicle/", env!("CARGO_PKG_VERSION"));
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// GitHub API response for a single release
#[derive(Debug, Deserialize)]
struct GitHubRelease {
    tag_name: String,
    body: Option<String>,
}

/// GitHub API error response
#[derive(Debug, Deserialize)]
struct GitHubErrorBody {
    message: String,
}

/// GitHub Releases client
pub struct GitHubReleases {
    api_url: String,
    owner: String,
    repo: String,
    token: Option<String>,
    client: Client,
}

impl GitHubReleases {
    /// Create a client from configuration, reading the token from the environment
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let token = Self::load_token(&config.token_env);
        Self::with_token(config, token)
    }

    /// Create a client with an explicit token
    pub fn with_token(config: &GitHubConfig, token: Option<String>) -> Result<Self> {
        let (owner, repo) = config.owner_and_repo().ok_or_else(|| {
            ReleaseError::ConfigurationError(
                "github.repository must be set as owner/repo".to_string(),
            )
        })?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token,
            client,
        })
    }

    /// Load token from the named environment variable
    fn load_token(token_env: &str) -> Option<String> {
        match std::env::var(token_env) {
            Ok(token) if !token.trim().is_empty() => {
                debug!(env = token_env, "Loaded GitHub token");
                Some(token.trim().to_string())
            }
            _ => {
                warn!(
                    env = token_env,
                    "No GitHub token found, requests will be unauthenticated"
                );
                None
            }
        }
    }

    /// Whether requests carry a token
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// API URL of the release tagged `tag`
    pub fn release_url(&self, tag: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.api_url, self.owner, self.repo, tag
        )
    }

    fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
        headers
            .get(RATE_LIMIT_REMAINING)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            == Some(0)
    }

    fn retry_after(headers: &HeaderMap) -> Option<u64> {
        headers
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    }

    /// Convert a non-success response into an error
    async fn error_for(tag: &str, response: reqwest::Response) -> ReleaseError {
        let status = response.status();
        let headers = response.headers().clone();

        if status == StatusCode::NOT_FOUND {
            return ReleaseError::NotFound(tag.to_string());
        }

        if status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN && Self::rate_limit_exhausted(&headers))
        {
            return ReleaseError::RateLimited {
                retry_after: Self::retry_after(&headers),
            };
        }

        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<GitHubErrorBody>(&text) {
            Ok(body) => body.message,
            Err(_) => text,
        };

        ReleaseError::ApiError {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleases {
    fn name(&self) -> &str {
        "github"
    }

    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn fetch_body(&self, tag: &str) -> Result<String> {
        let url = self.release_url(tag);
        debug!(url = %url, authenticated = self.is_authenticated(), "Fetching release");

        let mut request = self.client.get(&url).header(ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::error_for(tag, response).await);
        }

        let text = response.text().await?;
        let release: GitHubRelease = serde_json::from_str(&text)?;
        let body = release.body.unwrap_or_default();

        info!(tag = %release.tag_name, body_len = body.len(), "Fetched release");
        Ok(body)
    }
}
