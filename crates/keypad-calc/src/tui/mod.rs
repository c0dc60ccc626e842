//! Terminal front-end
//!
//! Keyboard mapping, a crossterm-backed surface and the interactive loop.

mod app;
mod input;
mod terminal;

pub use app::run;
pub use input::{InputHandler, KeyAction};
pub use terminal::{terminal_color, TerminalSurface, DISPLAY_WIDTH};
