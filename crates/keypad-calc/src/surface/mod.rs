//! Display and keypad surfaces
//!
//! [`MockDom`] models a browser page, [`LineSurface`] just remembers what it
//! was told. The terminal surface lives in [`crate::tui`].

mod mock;

pub use mock::{
    button_id, keypad_events, DomElement, MockDom, ACTIVE_OPERATOR_CLASS, DISPLAY_ID,
    ERROR_DISPLAY_CLASS,
};

use crate::core::{DisplayStyle, Operator, StyleSpec};
use crate::router::{DisplaySurface, InputSurface};

/// Headless surface keeping the latest text, style and highlight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSurface {
    text: String,
    style: DisplayStyle,
    spec: Option<StyleSpec>,
    active: Option<Operator>,
}

impl LineSurface {
    /// Creates an empty surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Returns the concrete look last applied
    #[must_use]
    pub fn style_spec(&self) -> Option<&StyleSpec> {
        self.spec.as_ref()
    }

    /// Returns the highlighted operator
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        self.active
    }
}

impl DisplaySurface for LineSurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_style(&mut self, style: DisplayStyle, spec: &StyleSpec) {
        self.style = style;
        self.spec = Some(spec.clone());
    }
}

impl InputSurface for LineSurface {
    fn set_operator_active(&mut self, op: Option<Operator>) {
        self.active = op;
    }
}
