//! Event layer: input handling.
//!
//! Translates keyboard input into messages. The menu overlay takes key
//! priority while open; otherwise keys route by the focused panel.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
