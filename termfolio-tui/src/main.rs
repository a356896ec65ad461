//! termfolio
//!
//! A terminal portfolio following the Elm architecture:
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: ratatui rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: configuration and async contact delivery (`backend/`)
//!
//! Six independent units drive the page: the navigation menu toggle, the
//! navbar scroll style, section reveal, the About tabs, the typed-text
//! loop, and the contact form. Each owns a disjoint slice of the model.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Configuration (defaults if absent or malformed).
    let config = backend::load_or_default();
    view::theme::set_theme(config.theme);

    // 2. Backend service and application state.
    let mut contact = backend::ContactService::new(config.recipient)?;
    let mut app = model::App::new();

    // 3. Terminal up, main loop, terminal down (restored on both paths).
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut contact);
    restore_terminal(&mut terminal)?;

    result
}
