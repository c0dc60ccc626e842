//! Unified calculator driver
//!
//! Write the keypad scenario once, run it against every surface. Each
//! `verify_*` function drives a [`CalculatorDriver`] and asserts on what the
//! surface shows, not on engine internals.

use crate::core::{CalcResult, DisplayStyle, Operator, Phase};
use crate::router::InputRouter;
use crate::surface::{LineSurface, MockDom};

/// Abstract driver for keypad interactions
///
/// # Example
///
/// ```rust
/// use keypad_calc::driver::{verify_basic_arithmetic, CalculatorDriver};
/// use keypad_calc::prelude::*;
///
/// let mut driver = InputRouter::new(MockDom::calculator());
/// verify_basic_arithmetic(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Presses the control carrying `label`
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Gets the text on the display surface
    fn display_text(&self) -> String;

    /// Gets the display preset the surface shows
    fn display_style(&self) -> DisplayStyle;

    /// Gets the operator highlighted on the input surface
    fn active_operator(&self) -> Option<Operator>;

    /// Gets the engine's phase
    fn phase(&self) -> Phase;

    /// Presses a whitespace-separated sequence of labels
    fn enter(&mut self, script: &str) -> CalcResult<()> {
        for label in script.split_whitespace() {
            self.press(label)?;
        }
        Ok(())
    }

    /// Presses the clear control
    fn clear(&mut self) {
        // "C" always parses
        let _ = self.press("C");
    }
}

impl CalculatorDriver for InputRouter<MockDom> {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        InputRouter::press(self, label).map(|_| ())
    }

    fn display_text(&self) -> String {
        self.surface().display_text().to_string()
    }

    fn display_style(&self) -> DisplayStyle {
        self.surface().display_style()
    }

    fn active_operator(&self) -> Option<Operator> {
        let active = self.surface().active_operators();
        assert!(active.len() <= 1, "several operators highlighted: {active:?}");
        active.first().copied()
    }

    fn phase(&self) -> Phase {
        self.engine().phase()
    }
}

impl CalculatorDriver for InputRouter<LineSurface> {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        InputRouter::press(self, label).map(|_| ())
    }

    fn display_text(&self) -> String {
        self.surface().text().to_string()
    }

    fn display_style(&self) -> DisplayStyle {
        self.surface().style()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.surface().active_operator()
    }

    fn phase(&self) -> Phase {
        self.engine().phase()
    }
}

#[cfg(feature = "tui")]
impl<W: std::io::Write> CalculatorDriver for InputRouter<crate::tui::TerminalSurface<W>> {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        InputRouter::press(self, label).map(|_| ())
    }

    fn display_text(&self) -> String {
        self.surface().text().to_string()
    }

    fn display_style(&self) -> DisplayStyle {
        self.surface().style()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.surface().active_operator()
    }

    fn phase(&self) -> Phase {
        self.engine().phase()
    }
}

// ===== Unified scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("5 + 3 =").unwrap();
    assert_eq!(driver.display_text(), "8");
    driver.clear();

    driver.enter("9 − 4 =").unwrap();
    assert_eq!(driver.display_text(), "5");
    driver.clear();

    driver.enter("6 × 7 =").unwrap();
    assert_eq!(driver.display_text(), "42");
    driver.clear();

    driver.enter("2 0 ÷ 4 =").unwrap();
    assert_eq!(driver.display_text(), "5");
    driver.clear();
}

/// Verifies digit concatenation and the length limit
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("1 2 3 4 5 6 7 8 9 0").unwrap();
    assert_eq!(driver.display_text(), "1234567890");
    assert_eq!(driver.display_style(), DisplayStyle::Normal);

    driver.press("1").unwrap();
    assert_eq!(driver.display_text(), "Only 10 digits allowed");
    assert_eq!(driver.display_style(), DisplayStyle::Error);
    assert_eq!(driver.phase(), Phase::FirstEntered);

    driver.clear();
    assert_eq!(driver.display_text(), "0");
    assert_eq!(driver.display_style(), DisplayStyle::Normal);
}

/// Verifies decimal point, sign and percent
pub fn verify_decimal_sign_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("1 . . 5").unwrap();
    assert_eq!(driver.display_text(), "1.5");
    driver.press("±").unwrap();
    assert_eq!(driver.display_text(), "-1.5");
    driver.clear();

    driver.enter("5 0 %").unwrap();
    assert_eq!(driver.display_text(), "0.5");
    driver.clear();
}

/// Verifies division by zero and both recovery paths
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("7 ÷ 0 =").unwrap();
    assert_eq!(driver.display_text(), "Cannot divide by zero");
    assert_eq!(driver.display_style(), DisplayStyle::Error);
    assert_eq!(driver.active_operator(), None);
    assert_eq!(driver.phase(), Phase::Error);

    driver.clear();
    assert_eq!(driver.phase(), Phase::Empty);
    assert_eq!(driver.display_text(), "0");

    driver.enter("7 ÷ 0 = 2").unwrap();
    assert_eq!(driver.display_text(), "2");
    assert_eq!(driver.display_style(), DisplayStyle::Normal);
    assert_eq!(driver.phase(), Phase::FirstEntered);
    driver.clear();
}

/// Verifies switching and repeating an operator before the second operand
pub fn verify_operator_switch<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("5 +").unwrap();
    assert_eq!(driver.active_operator(), Some(Operator::Add));

    driver.press("-").unwrap();
    assert_eq!(driver.active_operator(), Some(Operator::Subtract));
    assert_eq!(driver.display_text(), "5");

    driver.press("-").unwrap();
    assert_eq!(driver.display_text(), "5");
    assert_eq!(driver.phase(), Phase::OperatorPending);

    driver.enter("2 =").unwrap();
    assert_eq!(driver.display_text(), "3");
    assert_eq!(driver.active_operator(), None);
    driver.clear();
}

/// Verifies chained operators resolve left to right
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("2 + 3 +").unwrap();
    assert_eq!(driver.display_text(), "5");
    assert_eq!(driver.active_operator(), Some(Operator::Add));

    driver.enter("4 =").unwrap();
    assert_eq!(driver.display_text(), "9");

    driver.enter("× 2 =").unwrap();
    assert_eq!(driver.display_text(), "18");
    driver.clear();
}

/// Verifies results are rounded to four fractional digits
pub fn verify_rounding<D: CalculatorDriver>(driver: &mut D) {
    driver.enter("1 ÷ 3 =").unwrap();
    assert_eq!(driver.display_text(), "0.3333");
    driver.clear();

    driver.enter("0 . 1 + 0 . 2 =").unwrap();
    assert_eq!(driver.display_text(), "0.3");
    driver.clear();
}

/// Runs every scenario
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_digit_entry(driver);
    verify_decimal_sign_percent(driver);
    verify_divide_by_zero(driver);
    verify_operator_switch(driver);
    verify_chaining(driver);
    verify_rounding(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_dom_driver() {
        let mut driver = InputRouter::new(MockDom::calculator());
        verify_all(&mut driver);
    }

    #[test]
    fn test_line_surface_driver() {
        let mut driver = InputRouter::new(LineSurface::new());
        verify_all(&mut driver);
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_terminal_driver() {
        let mut driver = InputRouter::new(crate::tui::TerminalSurface::new(Vec::new()));
        verify_all(&mut driver);
    }

    #[test]
    fn test_enter_stops_on_unknown_label() {
        let mut driver = InputRouter::new(LineSurface::new());
        assert!(driver.enter("1 sqrt 2").is_err());
        assert_eq!(CalculatorDriver::display_text(&driver), "1");
    }
}
