//! Input router
//!
//! Turns keypad labels into [`InputEvent`]s, runs each through the engine to
//! completion and applies the resulting render instructions to a surface.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult, DisplayStyle, Operator, StyleSpec};
use crate::engine::{CalculatorEngine, Render, RenderInstruction};

/// A discrete event emitted by the input surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit key (0-9)
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// The sign toggle key
    Sign,
    /// The percent key
    Percent,
    /// An operator key
    Operator(Operator),
    /// The equals key
    Equal,
    /// The clear key
    Clear,
}

impl InputEvent {
    /// Parses the label printed on a keypad control
    pub fn from_label(label: &str) -> CalcResult<Self> {
        let label = label.trim();
        if let Some(op) = Operator::from_symbol(label) {
            return Ok(Self::Operator(op));
        }
        match label {
            "." => Ok(Self::Decimal),
            "+/-" | "±" => Ok(Self::Sign),
            "%" => Ok(Self::Percent),
            "=" => Ok(Self::Equal),
            "C" | "AC" => Ok(Self::Clear),
            _ => {
                let mut chars = label.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    (Some(d), None) => Ok(Self::Digit(d as u8)),
                    _ => Err(CalcError::UnknownLabel(label.to_string())),
                }
            }
        }
    }

    /// Returns the keypad label for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Sign => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equal => "=".to_string(),
            Self::Clear => "C".to_string(),
        }
    }
}

/// Something that shows the display text
pub trait DisplaySurface {
    /// Replaces the display text
    fn set_text(&mut self, text: &str);

    /// Applies a concrete display look
    fn set_style(&mut self, style: DisplayStyle, spec: &StyleSpec);
}

/// Something that hosts the operator controls
pub trait InputSurface {
    /// Highlights `op` and removes any other highlight
    fn set_operator_active(&mut self, op: Option<Operator>);
}

/// A surface that is both display and keypad
pub trait Surface: DisplaySurface + InputSurface {}

impl<T: DisplaySurface + InputSurface> Surface for T {}

/// Dispatches input events to the engine and renders onto a surface
#[derive(Debug)]
pub struct InputRouter<S> {
    engine: CalculatorEngine,
    surface: S,
    events_handled: usize,
}

impl<S: Surface> InputRouter<S> {
    /// Creates a router with default configuration and paints the surface
    pub fn new(surface: S) -> Self {
        Self::with_engine(CalculatorEngine::new(), surface)
    }

    /// Creates a router with the given configuration
    pub fn with_config(config: CalculatorConfig, surface: S) -> Self {
        Self::with_engine(CalculatorEngine::with_config(config), surface)
    }

    /// Creates a router around an existing engine and paints the surface
    pub fn with_engine(engine: CalculatorEngine, surface: S) -> Self {
        let mut router = Self {
            engine,
            surface,
            events_handled: 0,
        };
        let render = router.engine.view().full_render();
        router.apply(&render);
        router
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the surface
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the router, returning the surface
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Returns how many events have been dispatched
    #[must_use]
    pub fn events_handled(&self) -> usize {
        self.events_handled
    }

    /// Runs one event through the engine and renders the result
    pub fn dispatch(&mut self, event: InputEvent) -> Render {
        trace!(?event, phase = ?self.engine.phase(), "dispatching");
        let render = match event {
            InputEvent::Digit(d) => self.engine.on_digit(d),
            InputEvent::Decimal => self.engine.on_decimal(),
            InputEvent::Sign => self.engine.on_sign(),
            InputEvent::Percent => self.engine.on_percent(),
            InputEvent::Operator(op) => self.engine.on_operator(op),
            InputEvent::Equal => self.engine.on_equal(),
            InputEvent::Clear => self.engine.on_clear(),
        };
        self.events_handled += 1;
        self.apply(&render);
        debug!(
            ?event,
            phase = ?self.engine.phase(),
            instructions = render.len(),
            "event handled"
        );
        render
    }

    /// Parses a label and dispatches it
    pub fn press(&mut self, label: &str) -> CalcResult<Render> {
        let event = InputEvent::from_label(label)?;
        Ok(self.dispatch(event))
    }

    /// Dispatches a whitespace-separated sequence of labels
    ///
    /// Stops at the first unknown label; earlier labels stay applied.
    pub fn press_sequence(&mut self, script: &str) -> CalcResult<()> {
        for label in script.split_whitespace() {
            self.press(label)?;
        }
        Ok(())
    }

    fn apply(&mut self, render: &[RenderInstruction]) {
        for instruction in render {
            match instruction {
                RenderInstruction::SetText(text) => self.surface.set_text(text),
                RenderInstruction::SetStyle(style) => {
                    let spec = self.engine.config().style(*style);
                    self.surface.set_style(*style, spec);
                }
                RenderInstruction::SetOperatorActive(op) => {
                    self.surface.set_operator_active(*op);
                }
            }
        }
    }
}
