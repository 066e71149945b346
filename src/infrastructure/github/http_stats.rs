//! HTTP implementation of [`GithubStatsClient`].

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::ports::GithubStatsClient;
use crate::error::StatsError;
use crate::infrastructure::base_directory;

/// Body of `GET {contributions}/{username}.json`; other fields are ignored.
#[derive(Debug, Deserialize)]
struct ContributionsBody {
    #[serde(rename = "totalContributions")]
    total_contributions: u64,
}

/// Body of `GET {api}/users/{username}`; other fields are ignored.
#[derive(Debug, Deserialize)]
struct UserProfile {
    public_repos: u64,
}

/// Reads statistics from the public contributions API and the GitHub REST API.
///
/// Non-2xx responses and bodies without the expected numeric field are errors.
pub struct HttpGithubStats {
    client: Client,
    contributions_base: Url,
    api_base: Url,
}

impl HttpGithubStats {
    /// # Errors
    ///
    /// Returns [`StatsError::Transport`] if the HTTP client cannot be initialised.
    pub fn new(contributions_base: Url, api_base: Url) -> Result<Self, StatsError> {
        // GitHub rejects requests without a User-Agent.
        let client = Client::builder()
            .user_agent(concat!("portfolio-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, contributions_base, api_base))
    }

    pub fn with_client(client: Client, contributions_base: Url, api_base: Url) -> Self {
        Self {
            client,
            contributions_base: base_directory(&contributions_base),
            api_base: base_directory(&api_base),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, StatsError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl GithubStatsClient for HttpGithubStats {
    async fn total_contributions(&self, username: &str) -> Result<u64, StatsError> {
        let url = self.contributions_base.join(&format!("{username}.json"))?;
        let body: ContributionsBody = self.fetch_json(url).await?;
        Ok(body.total_contributions)
    }

    async fn public_repos(&self, username: &str) -> Result<u64, StatsError> {
        let url = self.api_base.join(&format!("users/{username}"))?;
        let profile: UserProfile = self.fetch_json(url).await?;
        Ok(profile.public_repos)
    }
}
