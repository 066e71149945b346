//! Single-slot, auto-dismissing notification presenter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::debug;

use crate::domain::entities::{Notification, NotificationId, Severity};
use crate::domain::ports::NotificationSurface;

/// How long a notification stays before it starts leaving.
pub const DEFAULT_DISPLAY: Duration = Duration::from_millis(5000);
/// Length of the slide-out animation before removal.
pub const DEFAULT_EXIT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub display: Duration,
    pub exit: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            display: DEFAULT_DISPLAY,
            exit: DEFAULT_EXIT,
        }
    }
}

/// The one place on the page a notification can occupy.
#[derive(Debug, Default)]
struct Slot {
    current: Option<NotificationId>,
}

/// Shows one notification at a time.
///
/// Presenting replaces whatever is attached immediately, without waiting for
/// its exit animation (last write wins, no queue). Every notification leaves
/// on its own after [`NotificationTiming::display`], or earlier through
/// [`NotificationPresenter::dismiss`].
///
/// Timers are spawned on the current Tokio runtime.
pub struct NotificationPresenter {
    surface: Arc<dyn NotificationSurface>,
    slot: Arc<Mutex<Slot>>,
    next_id: AtomicU64,
    timing: NotificationTiming,
}

impl NotificationPresenter {
    pub fn new(surface: Arc<dyn NotificationSurface>) -> Self {
        Self::with_timing(surface, NotificationTiming::default())
    }

    pub fn with_timing(surface: Arc<dyn NotificationSurface>, timing: NotificationTiming) -> Self {
        Self {
            surface,
            slot: Arc::new(Mutex::new(Slot::default())),
            next_id: AtomicU64::new(1),
            timing,
        }
    }

    /// Shows `message`, replacing any notification currently attached.
    pub fn present(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let notification = Notification::new(id, message, severity);

        {
            let mut slot = lock(&self.slot);
            if let Some(previous) = slot.current.replace(id) {
                debug!(%previous, replaced_by = %id, "Replacing notification");
                self.surface.remove(previous);
            }
            self.surface.mount(&notification);
        }

        debug!(%id, %severity, message = %notification.message, "Notification presented");

        let surface = Arc::clone(&self.surface);
        let slot = Arc::clone(&self.slot);
        let timing = self.timing;
        tokio::spawn(async move {
            tokio::time::sleep(timing.display).await;
            exit_sequence(surface, slot, id, timing.exit).await;
        });

        id
    }

    /// Starts the exit sequence of `id` now. Ignored if it is no longer attached.
    pub fn dismiss(&self, id: NotificationId) {
        if !is_attached(&self.slot, id) {
            debug!(%id, "Dismiss ignored, notification already gone");
            return;
        }

        tokio::spawn(exit_sequence(
            Arc::clone(&self.surface),
            Arc::clone(&self.slot),
            id,
            self.timing.exit,
        ));
    }

    /// Id of the attached notification, if any.
    pub fn current(&self) -> Option<NotificationId> {
        lock(&self.slot).current
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }
}

/// Plays the exit animation, then detaches `id` if it is still attached.
async fn exit_sequence(
    surface: Arc<dyn NotificationSurface>,
    slot: Arc<Mutex<Slot>>,
    id: NotificationId,
    exit: Duration,
) {
    if !start_exit(surface.as_ref(), &slot, id) {
        return;
    }

    tokio::time::sleep(exit).await;

    let mut slot = lock(&slot);
    if slot.current == Some(id) {
        slot.current = None;
        surface.remove(id);
        debug!(%id, "Notification removed");
    }
}

/// Starts the exit animation of `id` while it is attached; the slot stays
/// locked until the surface has been told.
fn start_exit(surface: &dyn NotificationSurface, slot: &Mutex<Slot>, id: NotificationId) -> bool {
    let slot = lock(slot);
    if slot.current != Some(id) {
        return false;
    }
    surface.begin_exit(id);
    true
}

fn is_attached(slot: &Mutex<Slot>, id: NotificationId) -> bool {
    lock(slot).current == Some(id)
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
