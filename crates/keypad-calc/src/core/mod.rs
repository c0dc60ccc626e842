//! Core calculator types
//!
//! Operators and their arithmetic, the display buffer and its styles, and the
//! operand/operator state the engine mutates.

pub mod display;
mod operations;
pub mod state;

pub use display::{DisplayBuffer, DisplayStyle, StyleSpec};
pub use operations::{format_result, round_result, Operator};
pub use state::{CalculatorState, Phase};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The `Display` text of each user-visible variant is exactly what the
/// display surface shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a zero divisor was resolved
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// A result too large to represent
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// A digit would push the buffer past the configured length
    #[error("Only {max} digits allowed")]
    DigitLimit {
        /// Configured maximum buffer length
        max: usize,
    },
    /// A label that no input control produces
    #[error("Unknown input label: {0:?}")]
    UnknownLabel(String),
}

impl CalcError {
    /// Returns true for errors that reset the calculation
    #[must_use]
    pub const fn resets_state(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow)
    }
}
