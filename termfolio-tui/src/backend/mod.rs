//! Backend layer: everything that touches the outside world.
//!
//! Fully decoupled from the UI: the update layer hands the contact
//! service a prepared request, the service runs the POST on its own tokio
//! runtime, and the main loop drains completed outcomes back into
//! messages before each draw. Configuration loading lives here too.

mod config;
mod contact;

pub use config::{load_or_default, AppConfig, ConfigError, DEFAULT_RECIPIENT};
pub use contact::ContactService;
