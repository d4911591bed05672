/// Page events with element targeting.
///
/// The host translates whatever its view layer produces into these and
/// hands them to the page behaviors one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The element was clicked.
    Click { target: String },
    /// The value of a text control changed (one event per keystroke).
    Input { target: String, value: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Event::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    /// ID of the element the event is aimed at.
    pub fn target(&self) -> &str {
        match self {
            Event::Click { target } | Event::Input { target, .. } => target,
        }
    }
}
