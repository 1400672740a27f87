//! Application state and command execution.
//!
//! `App` stands in for the player, file and window collaborators: it owns the
//! UI mode flags that are fed back into key resolution and keeps the tallies a
//! real player would mutate. Media decoding and file operations are not
//! performed; commands are only recorded.

use std::collections::VecDeque;

use crate::config::Config;
use crate::input::{Command, Gesture, SeekStep, UiMode};
use crate::log;

/// Playback rates stepped through by `[` and `]`.
pub const SPEED_STEPS: &[f64] = &[0.5, 0.75, 1.0, 1.25, 1.5, 2.0];
const NORMAL_SPEED_IDX: usize = 2;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Mode flags consulted by key resolution
    pub mode: UiMode,
    pub seek: SeekStep,

    /// Most recent first
    pub history: VecDeque<Command>,
    history_len: usize,

    pub paused: bool,
    pub muted: bool,
    /// Hidden by the boss key until the next command
    pub hidden: bool,
    speed_idx: usize,
    /// Net seconds seeked since start
    pub seek_offset: f64,
    /// Net playlist moves (next minus previous)
    pub playlist_offset: i64,
    pub random_picks: u32,
    pub trashed: u32,
    pub moved: u32,

    /// A single click is waiting out the click window
    pub click_pending: bool,
    pause_on_lose_focus: bool,
    auto_resume_on_focus: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: UiMode::default(),
            seek: config.seek_step(),
            history: VecDeque::with_capacity(config.history_len),
            history_len: config.history_len,
            paused: false,
            muted: false,
            hidden: false,
            speed_idx: NORMAL_SPEED_IDX,
            seek_offset: 0.0,
            playlist_offset: 0,
            random_picks: 0,
            trashed: 0,
            moved: 0,
            click_pending: false,
            pause_on_lose_focus: config.pause_on_lose_focus,
            auto_resume_on_focus: config.auto_resume_on_focus,
        }
    }

    pub fn speed(&self) -> f64 {
        SPEED_STEPS[self.speed_idx]
    }

    pub fn last_command(&self) -> Option<&Command> {
        self.history.front()
    }

    /// Single click toggles playback, double click toggles full screen.
    pub fn on_gesture(&mut self, gesture: Gesture) {
        log::log_gesture(gesture);
        let command = match gesture {
            Gesture::SingleClick => Command::TogglePlayPause,
            Gesture::DoubleClick => Command::ToggleFullScreen,
        };
        self.execute(command);
    }

    /// The terminal lost focus: pause if configured to.
    pub fn focus_lost(&mut self) {
        log::log_event("Focus lost");
        if self.pause_on_lose_focus {
            self.paused = true;
        }
    }

    /// The terminal regained focus: resume a paused player if configured to.
    pub fn focus_gained(&mut self) {
        log::log_event("Focus gained");
        if self.auto_resume_on_focus && self.paused {
            self.paused = false;
        }
    }

    /// Apply a resolved command. `Unhandled` is ignored.
    pub fn execute(&mut self, command: Command) {
        if !command.is_handled() {
            return;
        }
        log::log_command(&command);

        if command != Command::ActivateBossKey {
            self.hidden = false;
        }

        match command {
            Command::ToggleFullScreen => self.mode.is_full_screen = !self.mode.is_full_screen,
            Command::ExitFullScreen => self.mode.is_full_screen = false,
            Command::SeekBackward(secs) => self.seek_offset -= secs,
            Command::SeekForward(secs) => self.seek_offset += secs,
            Command::PlayPrevious => self.playlist_offset -= 1,
            Command::PlayNext => self.playlist_offset += 1,
            Command::PlayRandom => self.random_picks += 1,
            Command::MoveToTrash => self.trashed += 1,
            Command::MoveCurrentFile => self.moved += 1,
            Command::TogglePlayPause => self.paused = !self.paused,
            Command::ToggleMute => self.muted = !self.muted,
            Command::DecreaseSpeed => self.speed_idx = self.speed_idx.saturating_sub(1),
            Command::IncreaseSpeed => {
                self.speed_idx = (self.speed_idx + 1).min(SPEED_STEPS.len() - 1)
            }
            Command::ActivateBossKey => {
                self.paused = true;
                self.hidden = true;
                self.mode.is_full_screen = false;
            }
            Command::Unhandled => {}
        }

        self.record(command);
    }

    fn record(&mut self, command: Command) {
        if self.history_len == 0 {
            return;
        }
        if self.history.len() == self.history_len {
            self.history.pop_back();
        }
        self.history.push_front(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_full_screen_round_trip() {
        let mut app = app();
        app.execute(Command::ToggleFullScreen);
        assert!(app.mode.is_full_screen);
        app.execute(Command::ExitFullScreen);
        assert!(!app.mode.is_full_screen);
    }

    #[test]
    fn test_gestures() {
        let mut app = app();
        app.on_gesture(Gesture::SingleClick);
        assert!(app.paused);
        app.on_gesture(Gesture::DoubleClick);
        assert!(app.mode.is_full_screen);
        assert_eq!(app.last_command(), Some(&Command::ToggleFullScreen));
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut app = app();
        for _ in 0..10 {
            app.execute(Command::IncreaseSpeed);
        }
        assert_eq!(app.speed(), 2.0);
        for _ in 0..10 {
            app.execute(Command::DecreaseSpeed);
        }
        assert_eq!(app.speed(), 0.5);
    }

    #[test]
    fn test_seek_accumulates() {
        let mut app = app();
        app.execute(Command::SeekForward(10.0));
        app.execute(Command::SeekForward(10.0));
        app.execute(Command::SeekBackward(5.0));
        assert_eq!(app.seek_offset, 15.0);
    }

    #[test]
    fn test_boss_key_hides_until_next_command() {
        let mut app = app();
        app.execute(Command::ToggleFullScreen);
        app.execute(Command::ActivateBossKey);
        assert!(app.hidden);
        assert!(app.paused);
        assert!(!app.mode.is_full_screen);

        app.execute(Command::PlayNext);
        assert!(!app.hidden);
    }

    #[test]
    fn test_focus_lost_pauses_by_default() {
        let mut app = app();
        app.focus_lost();
        assert!(app.paused);

        // Resuming is opt-in
        app.focus_gained();
        assert!(app.paused);
        // Focus changes are not commands
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_focus_gained_resumes_when_enabled() {
        let config = Config {
            auto_resume_on_focus: true,
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.focus_lost();
        assert!(app.paused);
        app.focus_gained();
        assert!(!app.paused);
    }

    #[test]
    fn test_focus_lost_keeps_playing_when_disabled() {
        let config = Config {
            pause_on_lose_focus: false,
            auto_resume_on_focus: true,
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.focus_lost();
        assert!(!app.paused);
        app.focus_gained();
        assert!(!app.paused);
    }

    #[test]
    fn test_unhandled_is_not_recorded() {
        let mut app = app();
        app.execute(Command::Unhandled);
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_history_is_bounded() {
        let config = Config {
            history_len: 2,
            ..Config::default()
        };
        let mut app = App::new(&config);
        app.execute(Command::PlayNext);
        app.execute(Command::PlayPrevious);
        app.execute(Command::PlayRandom);

        assert_eq!(
            app.history.iter().copied().collect::<Vec<_>>(),
            vec![Command::PlayRandom, Command::PlayPrevious]
        );
    }
}
