//! Application main loop.
//!
//! Single-threaded and cooperative: draw, check quit, poll input with a
//! short timeout, update. Two extra duties per iteration beyond the basic
//! cycle: finished contact submissions are drained from the backend
//! channel into messages, and a `Tick` is synthesized at a fixed 100 ms
//! cadence for the animations, measured against the last tick instant
//! so a burst of key events does not speed them up.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::backend::ContactService;
use crate::event;
use crate::message::{AppMessage, FormMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;
use crate::view::layout::CHROME_ROWS;

/// Animation tick cadence; also the input poll timeout.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the main loop until quit.
pub fn run(terminal: &mut Term, app: &mut App, contact: &mut ContactService) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // 1. Deliver finished submissions.
        while let Some(outcome) = contact.try_recv() {
            update::update(app, AppMessage::Form(FormMessage::Completed(outcome)), contact);
        }

        // 2. Feed the current viewport to the scroll model (reveals may
        //    fire on a resize without any scrolling).
        let size = terminal.size()?;
        app.scroll
            .set_viewport(size.height.saturating_sub(CHROME_ROWS));

        // 3. Render.
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 4. Quit check.
        if app.should_quit {
            break;
        }

        // 5. Poll input for the remainder of the tick.
        let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
        if let Some(event) = event::poll_event(timeout)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg, contact);
        }

        // 6. Fixed-cadence animation tick.
        if last_tick.elapsed() >= TICK_INTERVAL {
            update::update(app, AppMessage::Tick, contact);
            last_tick = Instant::now();
        }
    }

    Ok(())
}
