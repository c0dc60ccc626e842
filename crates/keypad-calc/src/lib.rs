//! Keypad Calculator
//!
//! A four-function calculator driven by discrete keypad events and rendered
//! onto a single text display.
//!
//! - [`engine`]: the input-state machine. Each handler returns render
//!   instructions instead of touching a display.
//! - [`router`]: parses keypad labels and applies the instructions to a
//!   [`router::Surface`].
//! - [`surface`]: a mock DOM page and a headless surface.
//! - `tui`: crossterm surface and interactive loop (feature `tui`).
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut router = InputRouter::new(MockDom::calculator());
//! router.press_sequence("7 ÷ 2 =").unwrap();
//! assert_eq!(router.surface().display_text(), "3.5");
//!
//! router.press_sequence("÷ 0 =").unwrap();
//! assert_eq!(router.surface().display_text(), "Cannot divide by zero");
//! assert_eq!(router.engine().phase(), Phase::Error);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod engine;
pub mod router;
pub mod surface;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, ConfigResult};
    pub use crate::core::{
        format_result, CalcError, CalcResult, CalculatorState, DisplayBuffer, DisplayStyle,
        Operator, Phase, StyleSpec,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::engine::{CalculatorEngine, Render, RenderInstruction, View};
    pub use crate::router::{DisplaySurface, InputEvent, InputRouter, InputSurface, Surface};
    pub use crate::surface::{LineSurface, MockDom};

    #[cfg(feature = "tui")]
    pub use crate::tui::TerminalSurface;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = CalculatorEngine::new();
        engine.on_digit(2);
        engine.on_operator(Operator::Multiply);
        engine.on_digit(4);
        engine.on_equal();
        assert_eq!(engine.display_text(), "8");
    }

    #[test]
    fn test_scenario_sum() {
        let mut router = InputRouter::new(LineSurface::new());
        router.press_sequence("5 + 3 =").unwrap();
        assert_eq!(router.surface().text(), "8");
    }

    #[test]
    fn test_scenario_divide_by_zero_resets() {
        let mut router = InputRouter::new(LineSurface::new());
        router.press_sequence("7 ÷ 0 =").unwrap();
        assert_eq!(router.surface().text(), "Cannot divide by zero");
        assert_eq!(router.engine().state().first_operand(), None);
        assert_eq!(router.engine().state().pending_operator(), None);
    }

    #[test]
    fn test_scenario_sign() {
        let mut router = InputRouter::new(LineSurface::new());
        router.press_sequence("1 . 5 ±").unwrap();
        assert_eq!(router.surface().text(), "-1.5");
    }

    #[test]
    fn test_scenario_operator_switch() {
        let mut router = InputRouter::new(LineSurface::new());
        router.press_sequence("5 + -").unwrap();
        assert_eq!(
            router.engine().state().pending_operator(),
            Some(Operator::Subtract)
        );
        assert_eq!(router.engine().state().first_operand(), Some(5.0));
        assert_eq!(router.surface().text(), "5");
    }
}
