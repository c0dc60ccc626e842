//! Terminal surface
//!
//! Draws the display line and the operator row with crossterm commands.
//! Any `Write` works as the target, so tests render into a `Vec<u8>`.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::core::{DisplayStyle, Operator, StyleSpec};
use crate::router::{DisplaySurface, InputSurface};

/// Width of the display line in cells
pub const DISPLAY_WIDTH: usize = 24;

/// Maps a style color name onto a terminal color
///
/// Black becomes the terminal's default foreground so dark themes stay
/// readable.
#[must_use]
pub fn terminal_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "orange" => Color::DarkYellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => Color::Reset,
    }
}

/// Renders calculator output into a terminal
#[derive(Debug)]
pub struct TerminalSurface<W: Write> {
    out: W,
    text: String,
    style: DisplayStyle,
    color: Color,
    active: Option<Operator>,
    last_error: Option<io::ErrorKind>,
}

impl<W: Write> TerminalSurface<W> {
    /// Creates a surface drawing into `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            text: String::new(),
            style: DisplayStyle::Normal,
            color: Color::Reset,
            active: None,
            last_error: None,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the display preset
    #[must_use]
    pub fn style(&self) -> DisplayStyle {
        self.style
    }

    /// Returns the display color
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the highlighted operator
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        self.active
    }

    /// Returns and clears the last write failure
    pub fn take_error(&mut self) -> Option<io::ErrorKind> {
        self.last_error.take()
    }

    /// Returns the writer
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Consumes the surface, returning the writer
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Redraws both lines
    pub fn redraw(&mut self) -> io::Result<()> {
        let line = format!("{:>width$}", self.text, width = DISPLAY_WIDTH);
        queue!(
            self.out,
            MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(self.color),
            Print(line),
            ResetColor,
            MoveTo(0, 1),
            Clear(ClearType::CurrentLine),
        )?;
        for op in Operator::ALL {
            if Some(op) == self.active {
                queue!(
                    self.out,
                    SetAttribute(Attribute::Reverse),
                    Print(format!(" {op} ")),
                    SetAttribute(Attribute::Reset),
                )?;
            } else {
                queue!(self.out, Print(format!(" {op} ")))?;
            }
        }
        queue!(self.out, MoveTo(0, 3), Print("q: quit  esc: clear  n: ±"))?;
        self.out.flush()
    }

    fn refresh(&mut self) {
        if let Err(err) = self.redraw() {
            tracing::warn!(error = %err, "terminal redraw failed");
            self.last_error = Some(err.kind());
        }
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.refresh();
    }

    fn set_style(&mut self, style: DisplayStyle, spec: &StyleSpec) {
        self.style = style;
        self.color = terminal_color(&spec.color);
        self.refresh();
    }
}

impl<W: Write> InputSurface for TerminalSurface<W> {
    fn set_operator_active(&mut self, op: Option<Operator>) {
        self.active = op;
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::InputRouter;

    /// Writer that always fails
    #[derive(Debug)]
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output(surface: &TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8_lossy(surface.writer()).into_owned()
    }

    #[test]
    fn test_terminal_color_mapping() {
        assert_eq!(terminal_color("red"), Color::Red);
        assert_eq!(terminal_color("RED"), Color::Red);
        assert_eq!(terminal_color("black"), Color::Reset);
        assert_eq!(terminal_color("chartreuse"), Color::Reset);
    }

    #[test]
    fn test_text_is_drawn() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.set_text("42");
        assert!(output(&surface).contains("42"));
        assert_eq!(surface.text(), "42");
    }

    #[test]
    fn test_error_style_sets_color() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.set_style(DisplayStyle::Error, &StyleSpec::error());
        assert_eq!(surface.color(), Color::Red);
        assert_eq!(surface.style(), DisplayStyle::Error);
    }

    #[test]
    fn test_operator_row_lists_all_operators() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.set_operator_active(Some(Operator::Add));
        let out = output(&surface);
        for op in Operator::ALL {
            assert!(out.contains(op.symbol()), "missing {op}");
        }
        assert_eq!(surface.active_operator(), Some(Operator::Add));
    }

    #[test]
    fn test_write_failure_recorded() {
        let mut surface = TerminalSurface::new(BrokenPipe);
        surface.set_text("1");
        assert!(surface.take_error().is_some());
        assert!(surface.take_error().is_none());
    }

    #[test]
    fn test_router_on_terminal() {
        let mut router = InputRouter::new(TerminalSurface::new(Vec::new()));
        router.press_sequence("5 + 3 =").unwrap();
        assert_eq!(router.surface().text(), "8");
        assert_eq!(router.surface().active_operator(), None);
    }
}
