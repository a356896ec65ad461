//! Model layer: all application state.
//!
//! One state struct per unit, aggregated by [`App`]. Nothing in here does
//! I/O; the update layer mutates, the view layer reads.

mod app;
pub mod document;
mod focus;
mod form;
mod menu;
mod scroll;
mod tabs;
mod typed;

pub use app::App;
pub use document::SectionId;
pub use focus::FocusPanel;
pub use form::{
    ContactFormState, FeedbackKind, FormField, FormStatus, FAILURE_TEXT, SUCCESS_TEXT,
};
pub use menu::MenuState;
pub use scroll::{ScrollState, PAGE_SCROLL_STEP};
pub use tabs::TabsState;
pub use typed::TypedTextState;
