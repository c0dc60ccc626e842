//! Calculator engine
//!
//! Owns the display buffer and calculation state and interprets one input at
//! a time. Handlers never touch a surface: each returns the render
//! instructions describing what changed, and the router applies them.
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.on_digit(5);
//! engine.on_operator(Operator::Add);
//! engine.on_digit(3);
//! engine.on_equal();
//! assert_eq!(engine.display_text(), "8");
//! ```

use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::core::{
    format_result, round_result, CalcError, CalcResult, CalculatorState, DisplayBuffer,
    DisplayStyle, Operator, Phase,
};

/// A single update for the display or input surface
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    /// Replace the display text
    SetText(String),
    /// Switch the display preset
    SetStyle(DisplayStyle),
    /// Highlight one operator control, or none
    SetOperatorActive(Option<Operator>),
}

/// Instructions produced by one handler, in application order
pub type Render = Vec<RenderInstruction>;

/// What the surfaces should currently show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Display text
    pub text: String,
    /// Display preset
    pub style: DisplayStyle,
    /// Highlighted operator
    pub active_operator: Option<Operator>,
}

impl View {
    /// Instructions that turn `self` into `next`
    #[must_use]
    pub fn diff(&self, next: &Self) -> Render {
        let mut render = Render::new();
        if self.text != next.text {
            render.push(RenderInstruction::SetText(next.text.clone()));
        }
        if self.style != next.style {
            render.push(RenderInstruction::SetStyle(next.style));
        }
        if self.active_operator != next.active_operator {
            render.push(RenderInstruction::SetOperatorActive(next.active_operator));
        }
        render
    }

    /// Instructions that paint this view onto a blank surface
    #[must_use]
    pub fn full_render(&self) -> Render {
        vec![
            RenderInstruction::SetText(self.text.clone()),
            RenderInstruction::SetStyle(self.style),
            RenderInstruction::SetOperatorActive(self.active_operator),
        ]
    }
}

/// The calculator's input-state machine
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    config: CalculatorConfig,
    buffer: DisplayBuffer,
    state: CalculatorState,
    /// Error message covering the buffer until the next input
    message: Option<CalcError>,
    active_operator: Option<Operator>,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates an engine with the given configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            buffer: DisplayBuffer::new(),
            state: CalculatorState::new(),
            message: None,
            active_operator: None,
        }
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the display buffer
    #[must_use]
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Returns the calculation state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the error currently on display, if any
    #[must_use]
    pub fn error(&self) -> Option<&CalcError> {
        self.message.as_ref()
    }

    /// Returns the text the display should show
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.message {
            Some(err) => err.to_string(),
            None => self.buffer.to_string(),
        }
    }

    /// Returns the display preset in effect
    #[must_use]
    pub fn display_style(&self) -> DisplayStyle {
        if self.message.is_some() {
            DisplayStyle::Error
        } else {
            DisplayStyle::Normal
        }
    }

    /// Returns the highlighted operator
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        self.active_operator
    }

    /// Returns the complete current view
    #[must_use]
    pub fn view(&self) -> View {
        View {
            text: self.display_text(),
            style: self.display_style(),
            active_operator: self.active_operator,
        }
    }

    /// Handles a digit key (`0`..=`9`)
    ///
    /// Values above 9 are ignored.
    pub fn on_digit(&mut self, digit: u8) -> Render {
        if digit > 9 {
            warn!(digit, "ignoring out-of-range digit");
            return Render::new();
        }
        let before = self.begin();
        if self.state.errored {
            debug!("digit clears error state");
            self.recover();
        }
        if self.state.operator_just_selected {
            self.start_entry();
        }
        match self.buffer.push_digit(digit, self.config.max_digits) {
            Ok(()) => {
                self.state.has_first_operand = true;
                debug!(digit, buffer = %self.buffer, "digit entered");
            }
            Err(err) => {
                warn!(digit, buffer = %self.buffer, error = %err, "digit rejected");
                self.message = Some(err);
            }
        }
        self.finish(&before)
    }

    /// Handles the decimal point key
    pub fn on_decimal(&mut self) -> Render {
        let before = self.begin();
        if self.state.errored {
            return self.finish(&before);
        }
        if self.state.operator_just_selected {
            self.start_entry();
        }
        if self.buffer.push_decimal() {
            debug!(buffer = %self.buffer, "decimal point entered");
        }
        self.finish(&before)
    }

    /// Handles the sign toggle key
    pub fn on_sign(&mut self) -> Render {
        let before = self.begin();
        if !self.state.errored && self.buffer.negate() {
            debug!(buffer = %self.buffer, "sign toggled");
        }
        self.finish(&before)
    }

    /// Handles the percent key
    pub fn on_percent(&mut self) -> Render {
        let before = self.begin();
        if !self.state.errored && self.buffer.percent() {
            debug!(buffer = %self.buffer, "percent applied");
        }
        self.finish(&before)
    }

    /// Handles an operator key
    ///
    /// With a second operand entered the pending calculation is resolved
    /// first and its result becomes the new first operand. Before a second
    /// operand, the same operator keeps the current display and a different
    /// one replaces the pending operator.
    pub fn on_operator(&mut self, op: Operator) -> Render {
        let before = self.begin();
        if self.state.errored {
            return self.finish(&before);
        }

        match self.state.pending_operator {
            Some(pending) if self.state.operator_just_selected => {
                if pending == op {
                    debug!(%op, buffer = %self.buffer, "operator repeated");
                } else {
                    debug!(from = %pending, to = %op, "operator switched");
                }
                self.select_operator(op);
                return self.finish(&before);
            }
            Some(_) => {
                self.state.second_operand = Some(self.capture());
                if self.resolve().is_err() {
                    return self.finish(&before);
                }
                self.active_operator = None;
            }
            None => {
                self.state.first_operand = Some(self.capture());
                self.state.has_first_operand = true;
            }
        }

        self.select_operator(op);
        debug!(%op, first = ?self.state.first_operand, "operator selected");
        self.finish(&before)
    }

    /// Handles the equals key
    pub fn on_equal(&mut self) -> Render {
        let before = self.begin();
        if self.state.errored || self.state.first_operand.is_none() {
            return self.finish(&before);
        }
        if self.state.pending_operator.is_none() {
            debug!("equals without pending operator");
            return self.finish(&before);
        }

        self.state.second_operand = Some(self.capture());
        if self.resolve().is_ok() {
            self.state.pending_operator = None;
            self.state.operator_just_selected = true;
            self.active_operator = None;
        }
        self.finish(&before)
    }

    /// Handles the clear key
    pub fn on_clear(&mut self) -> Render {
        let before = self.view();
        self.recover();
        self.active_operator = None;
        debug!("calculator cleared");
        self.finish(&before)
    }

    /// Applies the pending operator to both operands
    ///
    /// On success the rounded result becomes the first operand and the
    /// display text. Division by zero or overflow resets everything and
    /// leaves the error message on display. Missing operands make this a
    /// no-op.
    pub fn resolve(&mut self) -> CalcResult<()> {
        let (Some(a), Some(b), Some(op)) = (
            self.state.first_operand,
            self.state.second_operand,
            self.state.pending_operator,
        ) else {
            return Ok(());
        };

        match op.apply(a, b) {
            Ok(value) => {
                let precision = self.config.result_precision;
                let result = round_result(value, precision);
                self.state.first_operand = Some(result);
                self.state.second_operand = None;
                self.buffer.set(format_result(result, precision));
                debug!(a, %op, b, result, "resolved");
                Ok(())
            }
            Err(err) => {
                warn!(a, %op, b, error = %err, "resolve failed");
                self.state.reset_with_error();
                self.buffer.reset();
                self.active_operator = None;
                self.message = Some(err.clone());
                Err(err)
            }
        }
    }

    fn select_operator(&mut self, op: Operator) {
        self.state.pending_operator = Some(op);
        self.state.operator_just_selected = true;
        self.active_operator = Some(op);
    }

    /// Starts a fresh entry after an operator or equals
    ///
    /// The operator highlight goes off once the second operand begins.
    fn start_entry(&mut self) {
        self.buffer.clear();
        self.state.operator_just_selected = false;
        self.active_operator = None;
    }

    fn capture(&self) -> f64 {
        self.buffer.value().unwrap_or(0.0)
    }

    fn recover(&mut self) {
        self.state.reset();
        self.buffer.reset();
        self.message = None;
    }

    /// Snapshots the view and drops a transient digit-limit message
    fn begin(&mut self) -> View {
        let before = self.view();
        if matches!(self.message, Some(CalcError::DigitLimit { .. })) {
            self.message = None;
        }
        before
    }

    fn finish(&self, before: &View) -> Render {
        debug_assert!(self.state.is_consistent(), "pending operator without operand");
        before.diff(&self.view())
    }
}
