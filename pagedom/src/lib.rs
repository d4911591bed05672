pub mod document;
pub mod element;
pub mod event;
pub mod types;

pub use document::Document;
pub use element::Element;
pub use event::Event;
pub use types::*;
