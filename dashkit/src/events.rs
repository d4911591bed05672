//! Page event handling types and traits.
//!
//! Each behavior handles the events aimed at the elements it bound during
//! initialization; [`dispatch`] is a thin loop that offers an event to each
//! behavior in turn.

use pagedom::{Document, Event};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// A behavior attached to a page.
///
/// Handlers run synchronously to completion and mutate the document in
/// place. Returning [`EventResult::Ignored`] lets the next behavior see
/// the event.
pub trait PageBehavior {
    fn handle(&mut self, doc: &mut Document, event: &Event) -> EventResult;
}

/// Offer `event` to each behavior until one consumes it.
pub fn dispatch(
    behaviors: &mut [&mut dyn PageBehavior],
    doc: &mut Document,
    event: &Event,
) -> EventResult {
    for behavior in behaviors.iter_mut() {
        if behavior.handle(doc, event).is_handled() {
            return EventResult::Consumed;
        }
    }
    log::trace!("no behavior handled event for {}", event.target());
    EventResult::Ignored
}
