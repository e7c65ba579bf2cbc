// =============================================================================
// SkillBridge Web - Toast Notifications Service
// =============================================================================
// In-page toasts behind the board's `Notifier` seam. Each toast removes
// itself after `TOAST_TTL_MS`.
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use skillbridge_board::{NotificationKind, Notifier};

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u32 = 4_000;

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Toast queue shared through `AppState`.
#[derive(Clone, Copy, Debug)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    /// Push a toast and schedule its removal.
    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });

        let toaster = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            toaster.dismiss(id);
        });

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.push(kind, message);
    }
}
