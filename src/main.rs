mod app;
mod config;
mod error;
mod events;
mod input;
mod log;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        EventStream,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use tokio::sync::mpsc;

use app::App;
use config::Config;
use error::ViewerError;
use events::{Action, ClickCounter, EventHandler};
use input::{ClickDisambiguator, Gesture};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_override: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_override = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --config requires a path argument");
                }
            }
            _ => {
                // Unknown argument, ignore
            }
        }
        i += 1;
    }

    let config = match config_override {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    };
    log::log(&format!("Config: {:?}", config));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(&config);

    // Run the app
    let result = run_app(&mut terminal, &mut app, &config).await;

    restore_terminal(&mut terminal)?;

    log::log("=== vibeview stopped ===");
    result
}

/// Enter raw mode and the alternate screen with mouse capture and focus
/// reporting enabled. Raw mode is switched back off if a later step fails.
fn setup_terminal() -> error::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()
        .map_err(|e| ViewerError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    undo_on_error(enter_screen(), || {
        let _ = disable_raw_mode();
    })
}

/// Run `undo` when a setup step failed, passing the result through.
fn undo_on_error<T>(result: error::Result<T>, undo: impl FnOnce()) -> error::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn enter_screen() -> error::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> error::Result<()> {
    disable_raw_mode()
        .map_err(|e| ViewerError::Terminal(format!("Failed to disable raw mode: {}", e)))?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &Config) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Disambiguated clicks come back through this channel
    let (gesture_tx, mut gesture_rx) = mpsc::unbounded_channel::<Gesture>();
    let mut clicks = ClickDisambiguator::with_window(gesture_tx, config.click_window());
    log::log(&format!("Click window: {:?}", clicks.window()));

    let mut handler = EventHandler::new(
        ClickCounter::new(config.double_click_interval()),
        config.treat_control_as_command,
    );

    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    loop {
        // Render
        app.click_pending = clicks.is_pending();
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            // Queued input is handled before a deadline that expired meanwhile
            biased;

            // Terminal events (keyboard, mouse, focus, resize)
            maybe_event = event_stream.next() => {
                let event = match maybe_event {
                    Some(Ok(event)) => event,
                    Some(Err(e)) => {
                        log::log_event(&format!("Terminal read error: {}", e));
                        continue;
                    }
                    None => break,
                };

                match handler.handle_event(app, &event) {
                    Action::Quit => break,
                    Action::Execute(command) => app.execute(command),
                    Action::Click(click) => clicks.on_click(click),
                    Action::FocusLost => app.focus_lost(),
                    Action::FocusGained => app.focus_gained(),
                    Action::Redraw | Action::None => {}
                }
            }

            // Pending single click reached its deadline
            _ = clicks.expired() => {}

            Some(gesture) = gesture_rx.recv() => {
                app.on_gesture(gesture);
            }
        }
    }

    // Drop any pending single click before the app goes away
    clicks.cancel();
    Ok(())
}
