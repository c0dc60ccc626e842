//! Display buffer and display styles

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Text shown while nothing has been entered
pub const INITIAL_TEXT: &str = "0";

/// The numeric literal currently on the display
///
/// Holds digits, at most one decimal point and an optional leading minus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Creates a buffer showing `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: INITIAL_TEXT.to_string(),
        }
    }

    /// Returns the buffer text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of characters in the buffer
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the buffer holds no characters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true while the buffer shows the untouched `"0"`
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.text == INITIAL_TEXT
    }

    /// Resets the buffer to `"0"`
    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push_str(INITIAL_TEXT);
    }

    /// Empties the buffer so the next entry starts fresh
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replaces the buffer with a rendered literal
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Appends a digit, replacing a lone `"0"`
    ///
    /// Fails without touching the buffer when the result would be longer
    /// than `max_len` characters.
    pub fn push_digit(&mut self, digit: u8, max_len: usize) -> CalcResult<()> {
        let ch = char::from_digit(u32::from(digit), 10)
            .ok_or_else(|| CalcError::UnknownLabel(digit.to_string()))?;
        let next_len = if self.is_initial() { 1 } else { self.len() + 1 };
        if next_len > max_len {
            return Err(CalcError::DigitLimit { max: max_len });
        }
        if self.is_initial() {
            self.text.clear();
        }
        self.text.push(ch);
        Ok(())
    }

    /// Appends a decimal point unless one is already present
    ///
    /// An empty buffer becomes `"0."`. Returns whether the buffer changed.
    pub fn push_decimal(&mut self) -> bool {
        if self.text.contains('.') {
            return false;
        }
        if self.text.is_empty() {
            self.text.push('0');
        }
        self.text.push('.');
        true
    }

    /// Parses the buffer as a finite number
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.text.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Negates the buffer's value; no-op if it does not parse
    pub fn negate(&mut self) -> bool {
        self.map_value(|v| -v)
    }

    /// Divides the buffer's value by 100; no-op if it does not parse
    pub fn percent(&mut self) -> bool {
        self.map_value(|v| v / 100.0)
    }

    fn map_value(&mut self, f: impl FnOnce(f64) -> f64) -> bool {
        let Some(value) = self.value() else {
            return false;
        };
        let next = f(value);
        // Negating zero must not show "-0"
        let next = if next == 0.0 { 0.0 } else { next };
        self.text = next.to_string();
        true
    }
}

impl std::fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The two display presets the engine selects between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayStyle {
    /// Regular numeric output
    #[default]
    Normal,
    /// Error messages
    Error,
}

/// Concrete look of a display preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSpec {
    /// Text color name
    pub color: String,
    /// Font size with unit, e.g. `5em`
    pub font_size: String,
}

impl StyleSpec {
    /// Creates a style from color and font size
    #[must_use]
    pub fn new(color: &str, font_size: &str) -> Self {
        Self {
            color: color.to_string(),
            font_size: font_size.to_string(),
        }
    }

    /// Default look for [`DisplayStyle::Normal`]
    #[must_use]
    pub fn normal() -> Self {
        Self::new("black", "5em")
    }

    /// Default look for [`DisplayStyle::Error`]
    #[must_use]
    pub fn error() -> Self {
        Self::new("red", "50px")
    }
}
