//! Abstract commands produced by the input core.
//!
//! Commands represent user intents; the host executes them against the
//! player, file and window collaborators.

/// A command resolved from user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    // === Window ===
    /// Enter or leave full screen
    ToggleFullScreen,
    /// Leave full screen (only produced while full screen)
    ExitFullScreen,

    // === Playback position ===
    /// Seek backward by the given number of seconds
    SeekBackward(f64),
    /// Seek forward by the given number of seconds
    SeekForward(f64),

    // === Playlist ===
    PlayPrevious,
    PlayNext,
    PlayRandom,

    // === Files ===
    /// Move the current file to the trash
    MoveToTrash,
    /// Move the current file to the configured destination
    MoveCurrentFile,

    // === Player ===
    TogglePlayPause,
    ToggleMute,
    DecreaseSpeed,
    IncreaseSpeed,
    /// Hide playback immediately
    ActivateBossKey,

    // === No-op ===
    /// Input not claimed by the core; the host should handle it itself
    Unhandled,
}

impl Command {
    /// Whether the core claimed the input that produced this command.
    pub fn is_handled(&self) -> bool {
        !matches!(self, Command::Unhandled)
    }

    /// Short label for status display.
    pub fn label(&self) -> String {
        match self {
            Command::ToggleFullScreen => "toggle full screen".to_string(),
            Command::ExitFullScreen => "exit full screen".to_string(),
            Command::SeekBackward(secs) => format!("seek -{}s", secs),
            Command::SeekForward(secs) => format!("seek +{}s", secs),
            Command::PlayPrevious => "previous".to_string(),
            Command::PlayNext => "next".to_string(),
            Command::PlayRandom => "random".to_string(),
            Command::MoveToTrash => "move to trash".to_string(),
            Command::MoveCurrentFile => "move file".to_string(),
            Command::TogglePlayPause => "play/pause".to_string(),
            Command::ToggleMute => "mute".to_string(),
            Command::DecreaseSpeed => "slower".to_string(),
            Command::IncreaseSpeed => "faster".to_string(),
            Command::ActivateBossKey => "boss key".to_string(),
            Command::Unhandled => "unhandled".to_string(),
        }
    }
}
