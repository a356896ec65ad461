//! View layer: UI rendering.
//!
//! Reads the model, never mutates it. The document sections render to
//! fixed-height line blocks (see `model::document`) which the layout
//! windows by the current scroll offset.

pub mod components;
pub mod layout;
pub mod sections;
pub mod theme;

pub use layout::render;
