//! Interactive terminal loop

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{error, info};

use super::input::{InputHandler, KeyAction};
use super::terminal::TerminalSurface;
use crate::config::CalculatorConfig;
use crate::router::InputRouter;

/// Runs the calculator in the current terminal until the user quits
///
/// The terminal is restored even when the loop fails.
pub fn run(config: CalculatorConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let mut router = InputRouter::with_config(config, TerminalSurface::new(stdout));
    let result = event_loop(&mut router);

    let mut stdout: Stdout = router.into_surface().into_writer();
    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn event_loop<W: Write>(router: &mut InputRouter<TerminalSurface<W>>) -> io::Result<()> {
    check_surface(router)?;
    let handler = InputHandler::new();
    loop {
        if let Event::Key(key) = event::read()? {
            if !step(router, handler.handle_key(key))? {
                break;
            }
        }
    }
    info!(events = router.events_handled(), "calculator session ended");
    Ok(())
}

/// Applies one key action; returns `false` once the user quits
fn step<W: Write>(
    router: &mut InputRouter<TerminalSurface<W>>,
    action: KeyAction,
) -> io::Result<bool> {
    match action {
        KeyAction::Input(input) => {
            router.dispatch(input);
            check_surface(router)?;
            Ok(true)
        }
        KeyAction::Quit => Ok(false),
        KeyAction::None => Ok(true),
    }
}

/// Fails once the terminal has stopped accepting writes
fn check_surface<W: Write>(router: &mut InputRouter<TerminalSurface<W>>) -> io::Result<()> {
    match router.surface_mut().take_error() {
        Some(kind) => {
            error!(?kind, "terminal output failed, leaving");
            Err(io::Error::new(kind, "terminal write failed"))
        }
        None => Ok(()),
    }
}
