//! Message layer: the bridge between events and updates.
//!
//! The event layer translates raw terminal input into these messages; the
//! update layer consumes them. Async completions arrive the same way: the
//! main loop drains the contact channel into [`FormMessage::Completed`].

mod app;
mod content;
mod form;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use form::{FormMessage, SubmitOutcome};
pub use navigation::NavigationMessage;
