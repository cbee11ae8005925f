// src/stores/broadcaster.rs
//
// Ephemeral notification queue: at most one message visible, each new `show`
// preempting the last. A notification may carry an undo affordance; the undo
// window and the expiry timer race, whichever fires first wins and the other
// becomes inert.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

pub type UndoAction = Box<dyn Fn() + Send + Sync>;

struct ActiveNotification {
    message: String,
    visible_until: DateTime<Utc>,
    undo_label: Option<String>,
    undo_action: Option<UndoAction>,
    generation: u64,
}

/// Read-only snapshot of the visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub visible_until: DateTime<Utc>,
    pub undo_label: Option<String>,
}

pub struct NotificationBroadcaster {
    active: Arc<Mutex<Option<ActiveNotification>>>,
    generation: AtomicU64,
}

impl NotificationBroadcaster {
    pub fn new() -> Self {
        Self {
            active: Arc::new(Mutex::new(None)),
            generation: AtomicU64::new(0),
        }
    }

    /// Show a plain confirmation message for the default duration.
    pub fn show(&self, message: impl Into<String>) {
        self.publish(message, DEFAULT_NOTIFICATION_DURATION, None, None);
    }

    /// Show a message with an undo affordance for the default duration.
    pub fn show_with_undo(
        &self,
        message: impl Into<String>,
        undo_label: impl Into<String>,
        undo_action: UndoAction,
    ) {
        self.publish(
            message,
            DEFAULT_NOTIFICATION_DURATION,
            Some(undo_label.into()),
            Some(undo_action),
        );
    }

    /// Full-control variant. Replaces any visible notification and arms a
    /// fresh expiry timer; the replaced notification's timer becomes inert.
    pub fn publish(
        &self,
        message: impl Into<String>,
        duration: Duration,
        undo_label: Option<String>,
        undo_action: Option<UndoAction>,
    ) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let visible_until =
            Utc::now() + chrono::Duration::from_std(duration).unwrap_or_default();

        *self.active.lock().unwrap() = Some(ActiveNotification {
            message: message.into(),
            visible_until,
            undo_label,
            undo_action,
            generation,
        });

        let active = Arc::clone(&self.active);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = active.lock().unwrap();
            // Only expire the notification this timer was armed for.
            if slot.as_ref().map(|n| n.generation) == Some(generation) {
                *slot = None;
            }
        });
    }

    /// Invoke the active undo action, if any, and clear the notification.
    /// After expiry or replacement this is a no-op. Returns whether an undo
    /// ran.
    pub fn undo(&self) -> bool {
        let action = {
            let mut slot = self.active.lock().unwrap();
            let has_undo = slot
                .as_ref()
                .map(|n| n.undo_action.is_some())
                .unwrap_or(false);
            if has_undo {
                slot.take().and_then(|n| n.undo_action)
            } else {
                None
            }
        };

        // Run outside the lock so the action may show a fresh notification.
        match action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.active.lock().unwrap().as_ref().map(|n| Notification {
            message: n.message.clone(),
            visible_until: n.visible_until,
            undo_label: n.undo_label.clone(),
        })
    }

    pub fn is_visible(&self) -> bool {
        self.active.lock().unwrap().is_some()
    }
}

impl Default for NotificationBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
