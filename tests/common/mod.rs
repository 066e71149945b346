#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use portfolio_site::prelude::*;
use url::Url;

/// Everything the page was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCall {
    Mount(NotificationId, Severity, String),
    Exit(NotificationId),
    Remove(NotificationId),
    Text(String, String),
    Menu(bool),
    Header(HeaderState),
    Active(Option<String>),
    ScrollTo(f64),
    Hash(String),
    Reset,
}

/// In-memory page implementing every surface.
#[derive(Default)]
pub struct RecordingPage {
    calls: Mutex<Vec<PageCall>>,
    fields: Mutex<HashMap<String, String>>,
}

impl RecordingPage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_form(name: &str, email: &str, message: &str) -> Arc<Self> {
        let page = Self::default();
        {
            let mut fields = page.fields.lock().unwrap();
            fields.insert("name".to_string(), name.to_string());
            fields.insert("email".to_string(), email.to_string());
            fields.insert("message".to_string(), message.to_string());
        }
        Arc::new(page)
    }

    pub fn calls(&self) -> Vec<PageCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Notifications mounted so far, as `(severity, message)`.
    pub fn notifications(&self) -> Vec<(Severity, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PageCall::Mount(_, severity, message) => Some((severity, message)),
                _ => None,
            })
            .collect()
    }

    /// Notifications currently attached.
    pub fn attached(&self) -> usize {
        self.calls().iter().fold(0, |n, call| match call {
            PageCall::Mount(..) => n + 1,
            PageCall::Remove(_) => n - 1,
            _ => n,
        })
    }

    pub fn text(&self, selector: &str) -> Option<String> {
        self.calls().into_iter().rev().find_map(|call| match call {
            PageCall::Text(s, text) if s == selector => Some(text),
            _ => None,
        })
    }

    pub fn active_links(&self) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PageCall::Active(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn form_value(&self, name: &str) -> Option<String> {
        self.fields.lock().unwrap().get(name).cloned()
    }

    fn record(&self, call: PageCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl NotificationSurface for RecordingPage {
    fn mount(&self, n: &Notification) {
        self.record(PageCall::Mount(n.id, n.severity, n.message.clone()));
    }

    fn begin_exit(&self, id: NotificationId) {
        self.record(PageCall::Exit(id));
    }

    fn remove(&self, id: NotificationId) {
        self.record(PageCall::Remove(id));
    }
}

impl FormSurface for RecordingPage {
    fn field(&self, name: &str) -> Option<String> {
        self.form_value(name)
    }

    fn reset(&self) {
        for value in self.fields.lock().unwrap().values_mut() {
            value.clear();
        }
        self.record(PageCall::Reset);
    }
}

impl PageSurface for RecordingPage {
    fn set_text(&self, selector: &str, text: &str) {
        self.record(PageCall::Text(selector.to_string(), text.to_string()));
    }

    fn set_menu_open(&self, open: bool) {
        self.record(PageCall::Menu(open));
    }

    fn set_header_state(&self, state: HeaderState) {
        self.record(PageCall::Header(state));
    }

    fn set_active_link(&self, section: Option<&str>) {
        self.record(PageCall::Active(section.map(str::to_string)));
    }

    fn scroll_to(&self, top: f64) {
        self.record(PageCall::ScrollTo(top));
    }

    fn push_hash(&self, hash: &str) {
        self.record(PageCall::Hash(hash.to_string()));
    }
}

/// Email sender that resolves or rejects every message and counts calls.
pub struct FakeSender {
    accept: bool,
    calls: AtomicUsize,
    last: Mutex<Option<EmailRequest>>,
}

impl FakeSender {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            accept: true,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    pub fn rejecting() -> Arc<Self> {
        Arc::new(Self {
            accept: false,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<EmailRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for FakeSender {
    async fn send(&self, request: &EmailRequest) -> Result<(), SendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(request.clone());

        if self.accept {
            Ok(())
        } else {
            Err(SendError::Rejected {
                status: 500,
                body: "provider down".to_string(),
            })
        }
    }
}

/// Statistics client with fixed answers; `None` fails the call.
pub struct FakeStats {
    pub contributions: Option<u64>,
    pub repos: Option<u64>,
}

#[async_trait]
impl GithubStatsClient for FakeStats {
    async fn total_contributions(&self, _username: &str) -> Result<u64, StatsError> {
        self.contributions.ok_or(StatsError::Status(503))
    }

    async fn public_repos(&self, _username: &str) -> Result<u64, StatsError> {
        self.repos.ok_or(StatsError::Status(404))
    }
}

pub fn email_settings() -> EmailSettings {
    EmailSettings {
        service_id: "portfolio".to_string(),
        template_id: "portfolio_template".to_string(),
        public_key: "pk_test".to_string(),
    }
}

pub fn layout() -> PageLayout {
    PageLayout::new(
        70.0,
        800.0,
        vec![
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 700.0),
            Section::new("projects", 1500.0, 1000.0),
            Section::new("contact", 2500.0, 600.0),
        ],
    )
}

/// A controller wired to `page` with fake remote services.
pub fn create_controller(
    page: Arc<RecordingPage>,
    sender: Arc<FakeSender>,
    stats: FakeStats,
) -> Arc<PageController<FakeSender, FakeStats>> {
    let presenter = Arc::new(NotificationPresenter::new(page.clone()));
    let contact = Arc::new(ContactService::new(
        sender,
        presenter.clone(),
        email_settings(),
    ));
    let stats = Arc::new(StatsService::new(Arc::new(stats), page.clone()));

    PageController::new(PageParts {
        layout: layout(),
        page: page.clone(),
        form: page,
        presenter,
        contact,
        stats,
        github_username: "octocat".to_string(),
    })
}

/// Base URL of a local port nothing listens on.
pub fn closed_port_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{port}")).unwrap()
}
