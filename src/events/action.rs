//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent what the host loop does next with a terminal event.

use crate::input::{ClickEvent, Command};

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Hand a resolved command to the collaborators
    Execute(Command),
    /// Feed a click to the disambiguator
    Click(ClickEvent),
    /// Terminal lost focus
    FocusLost,
    /// Terminal regained focus
    FocusGained,
    /// Terminal was resized, redraw only
    Redraw,
    /// No action to take
    None,
}
