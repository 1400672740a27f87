//! Keyboard translation from terminal key events to core key events.

use crossterm::event::{KeyCode, KeyEvent as TermKeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{KeyEvent, Modifiers, PhysicalKey};

/// Translate a terminal key press into the core's key event.
///
/// Releases and repeats are dropped. Backspace is the "delete" key of the
/// keyboards the shortcuts were designed for; forward delete is left unbound.
pub fn translate_key(key: TermKeyEvent, treat_control_as_command: bool) -> Option<KeyEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let physical = match key.code {
        KeyCode::Esc => PhysicalKey::Escape,
        KeyCode::Left => PhysicalKey::LeftArrow,
        KeyCode::Right => PhysicalKey::RightArrow,
        KeyCode::Up => PhysicalKey::UpArrow,
        KeyCode::Down => PhysicalKey::DownArrow,
        KeyCode::Backspace => PhysicalKey::Delete,
        KeyCode::Char(' ') => PhysicalKey::Space,
        other => PhysicalKey::Other(other_key_code(other)),
    };

    let character = match key.code {
        KeyCode::Char(c) => Some(c),
        _ => None,
    };

    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    let modifiers = Modifiers {
        command: key.modifiers.contains(KeyModifiers::SUPER)
            || (treat_control_as_command && control),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        option: key.modifiers.contains(KeyModifiers::ALT),
        control,
    };

    Some(KeyEvent::new(physical, modifiers, character))
}

/// Stable identifier for keys without a dedicated physical-key rule.
fn other_key_code(code: KeyCode) -> u16 {
    match code {
        KeyCode::Char(c) => u16::try_from(u32::from(c)).unwrap_or(0),
        KeyCode::F(n) => 0xF000 + u16::from(n),
        KeyCode::Enter => 0xE000,
        KeyCode::Tab => 0xE001,
        KeyCode::Delete => 0xE002,
        KeyCode::Home => 0xE003,
        KeyCode::End => 0xE004,
        KeyCode::PageUp => 0xE005,
        KeyCode::PageDown => 0xE006,
        _ => 0,
    }
}

/// Host-level keys that act when the core leaves a press unhandled.
pub fn is_quit_key(key: &TermKeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') => key.modifiers.is_empty(),
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
