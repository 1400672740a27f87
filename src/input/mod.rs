//! Input interpretation core.
//!
//! Pure event-to-decision transformers with no I/O of their own:
//!
//! * [`click`]: turns raw clicks into single or double click notifications.
//! * [`keyboard`]: resolves key presses to a [`Command`].
//!
//! Both run on the host's event loop and never block.

pub mod click;
pub mod command;
pub mod keyboard;

pub use click::{ClickDisambiguator, ClickEvent, Gesture};
pub use command::Command;
pub use keyboard::{KeyEvent, Modifiers, PhysicalKey, SeekStep, UiMode, resolve};
