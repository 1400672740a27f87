use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use super::theme::{ACTIVE, BRIGHT, DIM, LOGO, PENDING};

const LOGO_TEXT: &str = "vibe";

/// Key legend shown at the bottom, in binding order.
const HOTKEYS: &[(&str, &str)] = &[
    ("[←→,.]", "seek"),
    ("[↑↓]", "prev/next"),
    ("[spc]", "play"),
    ("[r]", "random"),
    ("[m]", "mute"),
    ("[[/]]", "speed"),
    ("[C-f]", "full"),
    ("[1]", "move"),
    ("[bksp]", "trash"),
    ("[b]", "boss"),
    ("[q]", "quit"),
];

pub fn render(frame: &mut Frame, app: &App) {
    // Boss key: leave the screen blank until the next command
    if app.hidden {
        return;
    }

    let area = frame.area();

    // Main vertical layout: logo, status, history, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Length(4), // Status
        Constraint::Min(0),    // History
        Constraint::Length(2), // Hotkeys, wrapped on narrow terminals
    ])
    .split(area);

    render_logo(frame, main_layout[0]);
    render_status(frame, main_layout[1], app);
    render_history(frame, main_layout[2], app);
    render_hotkeys(frame, main_layout[3]);
}

fn render_logo(frame: &mut Frame, area: Rect) {
    let padding = area.width.saturating_sub(LOGO_TEXT.len() as u16) / 2;
    let mut spans = vec![Span::raw(" ".repeat(padding as usize))];
    spans.extend(
        LOGO_TEXT
            .chars()
            .zip(LOGO)
            .map(|(letter, color)| Span::styled(letter.to_string(), Style::new().fg(color).bold())),
    );

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn flag(label: &str, on: bool) -> Span<'static> {
    let color = if on { ACTIVE } else { DIM };
    Span::styled(format!("{} ", label), Style::new().fg(color))
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut flags = vec![
        flag("fullscreen", app.mode.is_full_screen),
        flag(if app.paused { "paused" } else { "playing" }, !app.paused),
        flag("muted", app.muted),
        Span::styled(format!("{}x", app.speed()), Style::new().fg(BRIGHT)),
    ];
    if app.click_pending {
        flags.push(Span::styled(" • click pending", Style::new().fg(PENDING)));
    }

    let counters = Line::styled(
        format!(
            "seek {:+}s • playlist {:+} • random {} • trashed {} • moved {}",
            app.seek_offset, app.playlist_offset, app.random_picks, app.trashed, app.moved
        ),
        Style::new().fg(DIM),
    );

    let last = match app.last_command() {
        Some(command) => Line::from(vec![
            Span::styled("last: ", Style::new().fg(DIM)),
            Span::styled(command.label(), Style::new().fg(BRIGHT)),
        ]),
        None => Line::styled("last: none", Style::new().fg(DIM)),
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::new().fg(DIM))
        .title(" status ");
    frame.render_widget(
        Paragraph::new(vec![Line::from(flags), counters, last]).block(block),
        area,
    );
}

fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = if app.history.is_empty() {
        vec![Line::styled(
            "No commands yet. Click or press a key.",
            Style::new().fg(DIM),
        )]
    } else {
        // The newest entry is already on the status line
        app.history
            .iter()
            .skip(1)
            .map(|command| Line::styled(command.label(), Style::new().fg(DIM)))
            .collect()
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::new().fg(DIM))
        .title(" earlier ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(HOTKEYS.len() * 2);
    for (i, (key, label)) in HOTKEYS.iter().enumerate() {
        spans.push(Span::styled(*key, Style::new().fg(BRIGHT)));
        let separator = if i + 1 < HOTKEYS.len() { " • " } else { "" };
        spans.push(Span::styled(
            format!(" {}{}", label, separator),
            Style::new().fg(DIM),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
        area,
    );
}
