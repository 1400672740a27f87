//! Central event handler that turns terminal events into actions.

use crossterm::event::Event;
use tokio::time::Instant;

use crate::app::App;
use crate::input::resolve;
use crate::log;

use super::Action;
use super::keyboard::{is_quit_key, translate_key};
use super::mouse::{ClickCounter, translate_mouse};

/// Central event handler for the application.
pub struct EventHandler {
    clicks: ClickCounter,
    treat_control_as_command: bool,
}

impl EventHandler {
    pub fn new(clicks: ClickCounter, treat_control_as_command: bool) -> Self {
        Self {
            clicks,
            treat_control_as_command,
        }
    }

    /// Handle a crossterm event (keyboard, mouse, focus, resize) and return an action.
    ///
    /// Key presses go through the core resolver with the app's current mode;
    /// whatever the core leaves unhandled falls back to host keys.
    pub fn handle_event(&mut self, app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) => {
                let Some(translated) = translate_key(*key, self.treat_control_as_command) else {
                    return Action::None;
                };
                let command = resolve(&translated, app.mode, &app.seek);
                log::log_key(&translated, &command);

                if command.is_handled() {
                    Action::Execute(command)
                } else if is_quit_key(key) {
                    Action::Quit
                } else {
                    Action::None
                }
            }
            Event::Mouse(mouse) => translate_mouse(*mouse, &mut self.clicks, Instant::now())
                .map(Action::Click)
                .unwrap_or(Action::None),
            Event::FocusLost => Action::FocusLost,
            Event::FocusGained => Action::FocusGained,
            Event::Resize(_, _) => Action::Redraw,
            _ => Action::None,
        }
    }
}
