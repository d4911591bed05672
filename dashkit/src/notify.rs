//! Transient alert notifications with auto-dismiss.
//!
//! Notifications are alert elements appended to the document body. Each
//! one stays fully shown for [`DEFAULT_DISMISS_AFTER`], then loses its
//! `show` class to fade out, and is removed [`DEFAULT_FADE_DURATION`] later.
//! Time only advances when the host calls [`Notifications::tick`].

use std::time::{Duration, Instant};

use log::debug;
use pagedom::{Document, Element, Event};

use crate::events::{EventResult, PageBehavior};

/// How long a notification is shown before it starts fading.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// How long the fade takes before the element is removed.
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(300);

const SHOW_CLASS: &str = "show";
const DISMISS_ATTR: &str = "data-bs-dismiss";

/// Alert flavor, mapped to the `alert-<level>` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Shown,
    Fading { since: Instant },
}

#[derive(Debug, Clone)]
struct Pending {
    element_id: String,
    close_id: String,
    shown_at: Instant,
    phase: Phase,
}

/// Tracks the notifications currently on the page.
#[derive(Debug, Clone)]
pub struct Notifications {
    dismiss_after: Duration,
    fade: Duration,
    pending: Vec<Pending>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            dismiss_after: DEFAULT_DISMISS_AFTER,
            fade: DEFAULT_FADE_DURATION,
            pending: Vec::new(),
        }
    }

    /// Override the show and fade durations.
    pub fn with_timings(mut self, dismiss_after: Duration, fade: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self.fade = fade;
        self
    }

    /// Append an alert showing `message` to the body. Returns its ID.
    pub fn show(
        &mut self,
        doc: &mut Document,
        message: impl Into<String>,
        level: NotificationLevel,
        now: Instant,
    ) -> String {
        let close = Element::button("")
            .class("btn-close")
            .attr("type", "button")
            .attr(DISMISS_ATTR, "alert")
            .attr("aria-label", "Close");
        let close_id = close.id.clone();

        let alert = Element::div()
            .class_list(&format!(
                "alert alert-{} alert-dismissible fade show notification-alert",
                level.as_str()
            ))
            .attr("role", "alert")
            .child(Element::text(message))
            .child(close);
        let element_id = alert.id.clone();

        doc.append_to_body(alert);
        self.pending.push(Pending {
            element_id: element_id.clone(),
            close_id,
            shown_at: now,
            phase: Phase::Shown,
        });
        debug!("notification {} shown ({})", element_id, level.as_str());
        element_id
    }

    /// Advance fades and removals up to `now`.
    ///
    /// Returns the IDs of notifications removed from the document.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) -> Vec<String> {
        let mut removed = Vec::new();
        let dismiss_after = self.dismiss_after;
        let fade = self.fade;

        self.pending.retain_mut(|p| {
            if p.phase == Phase::Shown {
                let fade_at = p.shown_at + dismiss_after;
                if now < fade_at {
                    return true;
                }
                doc.remove_class(&p.element_id, SHOW_CLASS);
                p.phase = Phase::Fading { since: fade_at };
            }
            let Phase::Fading { since } = p.phase else {
                return true;
            };
            if now < since + fade {
                return true;
            }
            doc.remove(&p.element_id);
            removed.push(p.element_id.clone());
            false
        });

        if !removed.is_empty() {
            debug!("notifications expired: {:?}", removed);
        }
        removed
    }

    /// Remove a notification right away. Returns false if it is not pending.
    pub fn dismiss(&mut self, doc: &mut Document, id: &str) -> bool {
        let Some(index) = self.pending.iter().position(|p| p.element_id == id) else {
            return false;
        };
        self.pending.remove(index);
        doc.remove(id);
        true
    }

    /// IDs of notifications still on the page, oldest first.
    pub fn active(&self) -> Vec<&str> {
        self.pending.iter().map(|p| p.element_id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl PageBehavior for Notifications {
    /// Clicking a notification's close button dismisses it.
    fn handle(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        let Event::Click { target } = event else {
            return EventResult::Ignored;
        };
        let Some(id) = self
            .pending
            .iter()
            .find(|p| &p.close_id == target)
            .map(|p| p.element_id.clone())
        else {
            return EventResult::Ignored;
        };
        self.dismiss(doc, &id);
        EventResult::Consumed
    }
}
