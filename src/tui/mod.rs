//! Terminal status view.

mod theme;
pub mod ui;
