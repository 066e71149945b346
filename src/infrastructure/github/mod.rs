//! GitHub statistics adapters.

mod http_stats;

pub use http_stats::HttpGithubStats;
