//! Mouse event handling.
//!
//! Terminals report presses but not click counts, so the host synthesizes the
//! count the way a windowing system would before handing the click to the
//! disambiguator.

use std::time::Duration;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::time::Instant;

use crate::input::ClickEvent;

/// Counts successive presses on the same cell within the multi-click interval.
#[derive(Debug, Clone)]
pub struct ClickCounter {
    interval: Duration,
    /// Last press time and position (column, row)
    last: Option<(Instant, u16, u16)>,
    count: u32,
}

impl ClickCounter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
            count: 0,
        }
    }

    /// Record a press and return its click count (1 for a fresh click).
    pub fn register(&mut self, column: u16, row: u16, at: Instant) -> u32 {
        let continues = match self.last {
            Some((time, last_column, last_row)) => {
                at.saturating_duration_since(time) <= self.interval
                    && last_column == column
                    && last_row == row
            }
            None => false,
        };

        self.count = if continues { self.count + 1 } else { 1 };
        self.last = Some((at, column, row));
        self.count
    }
}

/// Translate a left-button press into a click event. Other mouse events
/// (moves, drags, scrolls, other buttons) produce nothing.
pub fn translate_mouse(
    mouse: MouseEvent,
    counter: &mut ClickCounter,
    now: Instant,
) -> Option<ClickEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let count = counter.register(mouse.column, mouse.row, now);
            Some(ClickEvent::new(count, now))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    const INTERVAL: Duration = Duration::from_millis(300);

    fn left_down(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quick_presses_on_same_cell_count_up() {
        let mut counter = ClickCounter::new(INTERVAL);
        let t0 = Instant::now();

        assert_eq!(counter.register(5, 5, t0), 1);
        assert_eq!(counter.register(5, 5, t0 + Duration::from_millis(100)), 2);
        assert_eq!(counter.register(5, 5, t0 + Duration::from_millis(200)), 3);
    }

    #[test]
    fn test_slow_press_starts_over() {
        let mut counter = ClickCounter::new(INTERVAL);
        let t0 = Instant::now();

        assert_eq!(counter.register(5, 5, t0), 1);
        assert_eq!(counter.register(5, 5, t0 + Duration::from_millis(301)), 1);
    }

    #[test]
    fn test_moved_press_starts_over() {
        let mut counter = ClickCounter::new(INTERVAL);
        let t0 = Instant::now();

        assert_eq!(counter.register(5, 5, t0), 1);
        assert_eq!(counter.register(6, 5, t0 + Duration::from_millis(50)), 1);
    }

    #[test]
    fn test_only_left_press_translates() {
        let mut counter = ClickCounter::new(INTERVAL);
        let now = Instant::now();

        let click = translate_mouse(left_down(2, 3), &mut counter, now).unwrap();
        assert_eq!(click.click_count, 1);
        assert_eq!(click.timestamp, now);

        let mut right = left_down(2, 3);
        right.kind = MouseEventKind::Down(MouseButton::Right);
        assert!(translate_mouse(right, &mut counter, now).is_none());

        let mut scroll = left_down(2, 3);
        scroll.kind = MouseEventKind::ScrollDown;
        assert!(translate_mouse(scroll, &mut counter, now).is_none());

        // Ignored events don't disturb the count
        let click = translate_mouse(left_down(2, 3), &mut counter, now).unwrap();
        assert_eq!(click.click_count, 2);
    }
}
