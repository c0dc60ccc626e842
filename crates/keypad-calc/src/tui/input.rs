//! Keyboard input handling
//!
//! Maps terminal key presses onto calculator input events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Operator;
use crate::router::InputEvent;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the calculator
    Input(InputEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l' | 'u') => KeyAction::Input(InputEvent::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::char_action(c),
            KeyCode::Enter => KeyAction::Input(InputEvent::Equal),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Input(InputEvent::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a typed character to an action
    #[must_use]
    pub fn char_action(c: char) -> KeyAction {
        if let Some(d) = c.to_digit(10) {
            return KeyAction::Input(InputEvent::Digit(d as u8));
        }
        let event = match c {
            '.' | ',' => InputEvent::Decimal,
            '%' => InputEvent::Percent,
            'n' | '~' => InputEvent::Sign,
            '=' => InputEvent::Equal,
            'c' | 'C' => InputEvent::Clear,
            'q' => return KeyAction::Quit,
            other => match Operator::from_symbol(other.encode_utf8(&mut [0; 4])) {
                Some(op) => InputEvent::Operator(op),
                None => return KeyAction::None,
            },
        };
        KeyAction::Input(event)
    }
}
