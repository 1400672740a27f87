//! Colours used by the status view.

use ratatui::style::Color;

/// One colour per letter of the "vibe" logo
pub const LOGO: [Color; 4] = [
    Color::Rgb(255, 121, 97),  // #FF7961
    Color::Rgb(255, 196, 87),  // #FFC457
    Color::Rgb(120, 170, 255), // #78AAFF
    Color::Rgb(186, 140, 255), // #BA8CFF
];

pub const DIM: Color = Color::Rgb(128, 128, 140);
pub const BRIGHT: Color = Color::Rgb(240, 240, 240);
/// Flag that is currently on
pub const ACTIVE: Color = Color::Rgb(120, 200, 120);
/// Single click waiting out its window
pub const PENDING: Color = Color::Rgb(255, 196, 87);
