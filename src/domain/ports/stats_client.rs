//! Port for the public GitHub statistics endpoints.

use async_trait::async_trait;

use crate::error::StatsError;

/// Reads public statistics for a GitHub user.
///
/// # Implementations
///
/// - [`crate::infrastructure::github::HttpGithubStats`] - HTTP client over `reqwest`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GithubStatsClient: Send + Sync {
    /// Total contributions of `username` over the last year.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] on transport, status or payload failure.
    async fn total_contributions(&self, username: &str) -> Result<u64, StatsError>;

    /// Number of public repositories owned by `username`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] on transport, status or payload failure.
    async fn public_repos(&self, username: &str) -> Result<u64, StatsError>;
}
