//! The single toast notification and its auto-dismiss bookkeeping.
//!
//! Every `notify` or `dismiss` bumps a generation counter. A dismiss timer
//! carries the generation it was scheduled for, and [`Notifications::expire`]
//! ignores any timer whose generation is no longer current. The last timer
//! scheduled is the only one that can hide the toast.

use std::time::Duration;

use serde::Serialize;

use crate::types::ToastKind;

/// How long a toast stays up once shown.
pub const TOAST_DISMISS_AFTER: Duration = Duration::from_millis(4000);

/// The toast as rendered. A hidden toast keeps its last message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
}

/// Request to hide the toast of `generation` after `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    pub generation: u64,
    pub after: Duration,
}

/// Owner of the one active toast.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notifications {
    toast: Toast,
    generation: u64,
}

impl Notifications {
    #[must_use]
    pub const fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Generation of the most recent `notify` or `dismiss`.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Show `message`, replacing whatever was showing.
    ///
    /// The returned timer must be scheduled by the caller; earlier timers are
    /// void from this point on.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> DismissTimer {
        self.generation += 1;
        self.toast = Toast {
            message: message.into(),
            kind,
            visible: true,
        };
        DismissTimer {
            generation: self.generation,
            after: TOAST_DISMISS_AFTER,
        }
    }

    /// Hide the toast now and void any pending timer.
    ///
    /// Returns whether the toast was visible.
    pub const fn dismiss(&mut self) -> bool {
        self.generation += 1;
        let was_visible = self.toast.visible;
        self.toast.visible = false;
        was_visible
    }

    /// Handle a fired timer. Hides the toast only if `generation` is current.
    ///
    /// Returns whether anything changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.toast.visible {
            tracing::trace!(
                generation,
                current = self.generation,
                "ignoring stale toast timer"
            );
            return false;
        }
        self.toast.visible = false;
        true
    }
}
