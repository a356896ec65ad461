//! Reusable view components.

pub mod menu;
pub mod navbar;
pub mod statusbar;
