//! Key press resolution.
//!
//! Rules are consulted in a fixed order and the first match wins:
//! 1. Command + `f`
//! 2. Escape, only while full screen
//! 3. Physical keys (layout independent)
//! 4. Decoded characters (layout dependent)

use super::Command;

/// Physical key identifier, independent of keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalKey {
    Escape,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    /// The key left of the backspace position on most layouts ("delete" on Mac keyboards)
    Delete,
    Space,
    /// Any key without a dedicated rule
    Other(u16),
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub command: bool,
    pub shift: bool,
    pub option: bool,
    pub control: bool,
}

#[cfg(test)]
impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        command: false,
        shift: false,
        option: false,
        control: false,
    };

    pub const COMMAND: Modifiers = Modifiers {
        command: true,
        ..Modifiers::NONE
    };
}

/// A raw key press as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: PhysicalKey,
    pub modifiers: Modifiers,
    /// Decoded character, always lowercase
    pub character: Option<char>,
}

impl KeyEvent {
    /// Create a key event, lowercasing the decoded character.
    pub fn new(key: PhysicalKey, modifiers: Modifiers, character: Option<char>) -> Self {
        Self {
            key,
            modifiers,
            character: character.map(|c| c.to_lowercase().next().unwrap_or(c)),
        }
    }
}

#[cfg(test)]
impl KeyEvent {
    /// A plain press of a physical key with no character.
    pub fn key(key: PhysicalKey) -> Self {
        Self::new(key, Modifiers::NONE, None)
    }

    /// A plain press of a character key.
    pub fn char(c: char) -> Self {
        Self::new(PhysicalKey::Other(0), Modifiers::NONE, Some(c))
    }

    /// Replace the modifier set (for builder pattern)
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// UI mode flags supplied by the host at resolution time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiMode {
    pub is_full_screen: bool,
}

/// Seek amounts in seconds, supplied by configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekStep {
    pub backward_seconds: f64,
    pub forward_seconds: f64,
}

/// What a table entry resolves to once the seek step is known.
#[derive(Debug, Clone, Copy)]
enum Binding {
    Fixed(Command),
    SeekBackward,
    SeekForward,
}

impl Binding {
    fn command(self, seek: &SeekStep) -> Command {
        match self {
            Binding::Fixed(command) => command,
            Binding::SeekBackward => Command::SeekBackward(seek.backward_seconds),
            Binding::SeekForward => Command::SeekForward(seek.forward_seconds),
        }
    }
}

const PHYSICAL_KEY_BINDINGS: &[(PhysicalKey, Binding)] = &[
    (PhysicalKey::LeftArrow, Binding::SeekBackward),
    (PhysicalKey::RightArrow, Binding::SeekForward),
    (PhysicalKey::UpArrow, Binding::Fixed(Command::PlayPrevious)),
    (PhysicalKey::DownArrow, Binding::Fixed(Command::PlayNext)),
    (PhysicalKey::Delete, Binding::Fixed(Command::MoveToTrash)),
    (PhysicalKey::Space, Binding::Fixed(Command::TogglePlayPause)),
];

const CHARACTER_BINDINGS: &[(char, Binding)] = &[
    ('r', Binding::Fixed(Command::PlayRandom)),
    ('m', Binding::Fixed(Command::ToggleMute)),
    ('b', Binding::Fixed(Command::ActivateBossKey)),
    ('1', Binding::Fixed(Command::MoveCurrentFile)),
    (',', Binding::SeekBackward),
    ('.', Binding::SeekForward),
    ('[', Binding::Fixed(Command::DecreaseSpeed)),
    (']', Binding::Fixed(Command::IncreaseSpeed)),
];

/// Resolve a key press to at most one command.
///
/// Total and side-effect free: unknown input yields [`Command::Unhandled`] so
/// the host can forward it to its own default handling.
pub fn resolve(event: &KeyEvent, mode: UiMode, seek: &SeekStep) -> Command {
    if event.modifiers.command && event.character == Some('f') {
        return Command::ToggleFullScreen;
    }

    // Plain Escape belongs to the host unless we are full screen
    if event.key == PhysicalKey::Escape {
        return if mode.is_full_screen {
            Command::ExitFullScreen
        } else {
            Command::Unhandled
        };
    }

    if let Some((_, binding)) = PHYSICAL_KEY_BINDINGS
        .iter()
        .find(|(key, _)| *key == event.key)
    {
        return binding.command(seek);
    }

    event
        .character
        .and_then(|c| CHARACTER_BINDINGS.iter().find(|(ch, _)| *ch == c))
        .map(|(_, binding)| binding.command(seek))
        .unwrap_or(Command::Unhandled)
}
