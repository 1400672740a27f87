//! Event handling module for keyboard and mouse input.
//!
//! Translates terminal events into the input core's vocabulary and dispatches
//! Actions for the main loop.

mod action;
mod handler;
pub mod keyboard;
pub mod mouse;

pub use action::Action;
pub use handler::EventHandler;
pub use mouse::ClickCounter;
