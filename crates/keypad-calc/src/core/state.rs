//! Operand and operator state

use serde::Serialize;

use crate::core::Operator;

/// Coarse position in the entry cycle, derived from [`CalculatorState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Nothing entered yet
    Empty,
    /// First operand being entered, or a result on display
    FirstEntered,
    /// Operator chosen, waiting for the second operand
    OperatorPending,
    /// Second operand being entered
    SecondEntered,
    /// A division by zero reset the calculation
    Error,
}

/// Operands and pending operator of the calculation in progress
///
/// A pending operator always comes with a first operand.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalculatorState {
    pub(crate) first_operand: Option<f64>,
    pub(crate) second_operand: Option<f64>,
    pub(crate) pending_operator: Option<Operator>,
    pub(crate) operator_just_selected: bool,
    pub(crate) has_first_operand: bool,
    pub(crate) errored: bool,
}

impl CalculatorState {
    /// Creates the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured first operand
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Returns the captured second operand
    #[must_use]
    pub fn second_operand(&self) -> Option<f64> {
        self.second_operand
    }

    /// Returns the operator waiting to be resolved
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Returns true if the next digit starts a fresh buffer
    #[must_use]
    pub fn operator_just_selected(&self) -> bool {
        self.operator_just_selected
    }

    /// Returns true once a first operand has been entered
    #[must_use]
    pub fn has_first_operand(&self) -> bool {
        self.has_first_operand
    }

    /// Returns true if digits have been entered after the pending operator
    #[must_use]
    pub fn second_entry_started(&self) -> bool {
        self.pending_operator.is_some() && !self.operator_just_selected
    }

    /// Resets everything to the initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Resets and marks the state as errored
    pub fn reset_with_error(&mut self) {
        *self = Self {
            errored: true,
            ..Self::default()
        };
    }

    /// Derives the current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.errored {
            Phase::Error
        } else if self.pending_operator.is_some() {
            if self.operator_just_selected {
                Phase::OperatorPending
            } else {
                Phase::SecondEntered
            }
        } else if self.has_first_operand {
            Phase::FirstEntered
        } else {
            Phase::Empty
        }
    }

    /// Checks the pending-operator invariant
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.pending_operator.is_none() || self.has_first_operand
    }
}
