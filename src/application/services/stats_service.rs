//! GitHub statistics shown on the page.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::domain::ports::{GithubStatsClient, PageSurface};

/// Element showing the contribution count.
pub const CONTRIBUTIONS_TARGET: &str = "#contribution";
/// Element showing the public repository count.
pub const REPO_COUNT_TARGET: &str = "#repoCount";
/// Text shown when a statistic cannot be loaded.
pub const UNAVAILABLE: &str = "N/A";

/// Loads GitHub statistics into page elements.
///
/// Failures never propagate: they are logged and the element shows
/// [`UNAVAILABLE`] instead.
pub struct StatsService<G: GithubStatsClient> {
    client: Arc<G>,
    page: Arc<dyn PageSurface>,
}

impl<G: GithubStatsClient + 'static> StatsService<G> {
    pub fn new(client: Arc<G>, page: Arc<dyn PageSurface>) -> Self {
        Self { client, page }
    }

    /// Writes `"<n> Contributions"` into `target`.
    pub async fn load_contributions(&self, username: &str, target: &str) {
        let text = match self.client.total_contributions(username).await {
            Ok(total) => format!("{total} Contributions"),
            Err(err) => {
                error!(error = %err, %username, "Failed to load GitHub contributions");
                UNAVAILABLE.to_string()
            }
        };
        debug!(%target, %text, "Contributions loaded");
        self.page.set_text(target, &text);
    }

    /// Writes `"<n> Repositories"` into `target`.
    pub async fn load_repo_count(&self, username: &str, target: &str) {
        let text = match self.client.public_repos(username).await {
            Ok(total) => format!("{total} Repositories"),
            Err(err) => {
                error!(error = %err, %username, "Failed to fetch repo count");
                UNAVAILABLE.to_string()
            }
        };
        debug!(%target, %text, "Repository count loaded");
        self.page.set_text(target, &text);
    }

    /// Starts both loads into their default elements as independent tasks.
    ///
    /// Neither waits for the other and completion order is unspecified.
    pub fn spawn_all(self: &Arc<Self>, username: &str) -> [JoinHandle<()>; 2] {
        let contributions = {
            let service = Arc::clone(self);
            let username = username.to_string();
            tokio::spawn(async move {
                service
                    .load_contributions(&username, CONTRIBUTIONS_TARGET)
                    .await;
            })
        };

        let repos = {
            let service = Arc::clone(self);
            let username = username.to_string();
            tokio::spawn(async move {
                service.load_repo_count(&username, REPO_COUNT_TARGET).await;
            })
        };

        [contributions, repos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::HeaderState;
    use crate::domain::ports::MockGithubStatsClient;
    use crate::error::StatsError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct TextPage {
        texts: Mutex<HashMap<String, String>>,
    }

    impl TextPage {
        fn text(&self, selector: &str) -> Option<String> {
            self.texts.lock().unwrap().get(selector).cloned()
        }
    }

    impl PageSurface for TextPage {
        fn set_text(&self, selector: &str, text: &str) {
            self.texts
                .lock()
                .unwrap()
                .insert(selector.to_string(), text.to_string());
        }
        fn set_menu_open(&self, _open: bool) {}
        fn set_header_state(&self, _state: HeaderState) {}
        fn set_active_link(&self, _section: Option<&str>) {}
        fn scroll_to(&self, _top: f64) {}
        fn push_hash(&self, _hash: &str) {}
    }

    #[tokio::test]
    async fn test_contributions_text() {
        let mut client = MockGithubStatsClient::new();
        client
            .expect_total_contributions()
            .withf(|username| username == "octocat")
            .times(1)
            .returning(|_| Ok(842));

        let page = Arc::new(TextPage::default());
        let service = StatsService::new(Arc::new(client), page.clone());

        service
            .load_contributions("octocat", CONTRIBUTIONS_TARGET)
            .await;

        assert_eq!(
            page.text("#contribution").as_deref(),
            Some("842 Contributions")
        );
    }

    #[tokio::test]
    async fn test_contributions_failure_shows_placeholder() {
        let mut client = MockGithubStatsClient::new();
        client
            .expect_total_contributions()
            .returning(|_| Err(StatsError::Status(502)));

        let page = Arc::new(TextPage::default());
        let service = StatsService::new(Arc::new(client), page.clone());

        service.load_contributions("octocat", "#custom").await;

        assert_eq!(page.text("#custom").as_deref(), Some("N/A"));
    }

    #[tokio::test]
    async fn test_spawn_all_loads_independently() {
        let mut client = MockGithubStatsClient::new();
        client
            .expect_total_contributions()
            .returning(|_| Err(StatsError::Status(500)));
        client.expect_public_repos().returning(|_| Ok(31));

        let page = Arc::new(TextPage::default());
        let service = Arc::new(StatsService::new(Arc::new(client), page.clone()));

        for handle in service.spawn_all("octocat") {
            handle.await.unwrap();
        }

        assert_eq!(page.text(CONTRIBUTIONS_TARGET).as_deref(), Some("N/A"));
        assert_eq!(
            page.text(REPO_COUNT_TARGET).as_deref(),
            Some("31 Repositories")
        );
    }
}
