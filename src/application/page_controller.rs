//! The page controller: owns all per-page state and wires handlers to events.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::application::services::{
    ContactService, NotificationPresenter, StatsService, SubmissionOutcome,
};
use crate::domain::entities::page::MOBILE_BREAKPOINT;
use crate::domain::entities::{HeaderState, NavState, NotificationId, PageLayout};
use crate::domain::events::{EventBus, EventKind, PageEvent};
use crate::domain::ports::{EmailSender, FormSurface, GithubStatsClient, PageSurface};

/// Delay before the active nav link follows a scroll; restarted by every scroll.
pub const SCROLL_SPY_DEBOUNCE: Duration = Duration::from_millis(10);
/// Delay before the URL hash follows an anchor click.
pub const HASH_UPDATE_DELAY: Duration = Duration::from_millis(100);
/// Delay before scrolling to the section named in the URL on load.
pub const INITIAL_SCROLL_DELAY: Duration = Duration::from_millis(1000);
/// Delay before the post-load work (scroll-spy, statistics) starts.
pub const ENHANCEMENT_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Default)]
struct ControllerState {
    nav: NavState,
    last_scroll_top: f64,
    pending_spy: Option<JoinHandle<()>>,
}

/// Services and surfaces a [`PageController`] is built from.
pub struct PageParts<E: EmailSender, G: GithubStatsClient> {
    pub layout: PageLayout,
    pub page: Arc<dyn PageSurface>,
    pub form: Arc<dyn FormSurface>,
    pub presenter: Arc<NotificationPresenter>,
    pub contact: Arc<ContactService<E>>,
    pub stats: Arc<StatsService<G>>,
    pub github_username: String,
}

/// Single object constructed at startup that owns the page's mutable state.
///
/// Register it with [`PageController::install`]; afterwards everything is
/// driven by events published on the [`EventBus`]. There is no teardown.
pub struct PageController<E: EmailSender, G: GithubStatsClient> {
    layout: PageLayout,
    page: Arc<dyn PageSurface>,
    form: Arc<dyn FormSurface>,
    presenter: Arc<NotificationPresenter>,
    contact: Arc<ContactService<E>>,
    stats: Arc<StatsService<G>>,
    github_username: String,
    state: Mutex<ControllerState>,
}

impl<E, G> PageController<E, G>
where
    E: EmailSender + 'static,
    G: GithubStatsClient + 'static,
{
    pub fn new(parts: PageParts<E, G>) -> Arc<Self> {
        Arc::new(Self {
            layout: parts.layout,
            page: parts.page,
            form: parts.form,
            presenter: parts.presenter,
            contact: parts.contact,
            stats: parts.stats,
            github_username: parts.github_username,
            state: Mutex::new(ControllerState::default()),
        })
    }

    /// Registers the controller's handlers on `bus`.
    pub fn install(self: &Arc<Self>, bus: &mut EventBus) {
        let this = Arc::clone(self);
        bus.subscribe(EventKind::DomContentLoaded, move |event| {
            if let PageEvent::DomContentLoaded { hash } = event {
                this.on_load(hash.as_deref());
            }
        });

        let this = Arc::clone(self);
        bus.subscribe(EventKind::NavToggleClick, move |_| this.toggle_menu());

        let this = Arc::clone(self);
        bus.subscribe(EventKind::NavLinkClick, move |_| this.close_menu());

        let this = Arc::clone(self);
        bus.subscribe(EventKind::DocumentClick, move |event| {
            if let PageEvent::DocumentClick { inside_nav: false } = event {
                this.close_menu();
            }
        });

        let this = Arc::clone(self);
        bus.subscribe(EventKind::AnchorClick, move |event| {
            if let PageEvent::AnchorClick { href } = event {
                this.follow_anchor(href);
            }
        });

        let this = Arc::clone(self);
        bus.subscribe(EventKind::Scroll, move |event| {
            if let PageEvent::Scroll { top } = event {
                this.on_scroll(*top);
            }
        });

        let this = Arc::clone(self);
        bus.subscribe(EventKind::Resize, move |event| {
            if let PageEvent::Resize { width } = event
                && *width > MOBILE_BREAKPOINT
            {
                this.close_menu();
            }
        });

        let this = Arc::clone(self);
        bus.subscribe(EventKind::Submit, move |_| {
            this.submit_contact_form();
        });

        let this = Arc::clone(self);
        bus.subscribe(EventKind::NotificationClose, move |event| {
            if let PageEvent::NotificationClose { id } = event {
                this.dismiss_notification(*id);
            }
        });

        debug!(?bus, "Page handlers installed");
    }

    pub fn menu_open(&self) -> bool {
        self.lock_state().nav.menu_open
    }

    pub fn toggle_menu(&self) {
        let open = self.lock_state().nav.toggle();
        self.page.set_menu_open(open);
    }

    /// Closes the mobile menu if it is open.
    pub fn close_menu(&self) {
        if self.lock_state().nav.close() {
            self.page.set_menu_open(false);
        }
    }

    /// Scrolls to the section named by `href` (`#id`) and highlights its link.
    ///
    /// Returns `false` without side effects if no such section exists.
    pub fn follow_anchor(self: &Arc<Self>, href: &str) -> bool {
        let id = href.strip_prefix('#').unwrap_or(href);
        let Some(target) = self.layout.scroll_target(id) else {
            debug!(%href, "Anchor target not found");
            return false;
        };

        self.close_menu();
        self.page.scroll_to(target);
        self.page.set_active_link(Some(id));

        let page = Arc::clone(&self.page);
        let hash = format!("#{id}");
        tokio::spawn(async move {
            tokio::time::sleep(HASH_UPDATE_DELAY).await;
            page.push_hash(&hash);
        });

        true
    }

    /// Updates the header and schedules a debounced scroll-spy pass.
    pub fn on_scroll(self: &Arc<Self>, top: f64) {
        let mut state = self.lock_state();

        let header = HeaderState::from_scroll(top, state.last_scroll_top);
        state.last_scroll_top = top;
        self.page.set_header_state(header);

        if let Some(pending) = state.pending_spy.take() {
            pending.abort();
        }

        let this = Arc::clone(self);
        state.pending_spy = Some(tokio::spawn(async move {
            tokio::time::sleep(SCROLL_SPY_DEBOUNCE).await;
            this.update_active_link(top);
        }));
    }

    /// Highlights the nav link of the section in view at `scroll_top`.
    pub fn update_active_link(&self, scroll_top: f64) {
        let active = self.layout.active_section(scroll_top);
        debug!(scroll_top, ?active, "Scroll-spy");
        self.page.set_active_link(active);
    }

    /// Starts the contact submission flow in the background.
    pub fn submit_contact_form(&self) -> JoinHandle<SubmissionOutcome> {
        let contact = Arc::clone(&self.contact);
        let form = Arc::clone(&self.form);
        tokio::spawn(async move { contact.submit(form.as_ref()).await })
    }

    pub fn dismiss_notification(&self, id: NotificationId) {
        self.presenter.dismiss(id);
    }

    /// Post-load work: jump to the initial hash, then scroll-spy and statistics.
    pub fn on_load(self: &Arc<Self>, hash: Option<&str>) {
        info!(?hash, "Page loaded");

        if let Some(target) = hash
            .map(|h| h.trim_start_matches('#'))
            .and_then(|id| self.layout.scroll_target(id))
        {
            let page = Arc::clone(&self.page);
            tokio::spawn(async move {
                tokio::time::sleep(INITIAL_SCROLL_DELAY).await;
                page.scroll_to(target);
            });
        }

        let this = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(ENHANCEMENT_DELAY).await;
            let top = this.lock_state().last_scroll_top;
            this.update_active_link(top);
            this.stats.spawn_all(&this.github_username);
        });
    }

    fn lock_state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
