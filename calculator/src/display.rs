//! Display controller — the text buffer behind the calculator display

use crate::eval;
use crate::keypad::{self, BACKSPACE};

/// Text shown when `=` fails.
pub const ERROR_TEXT: &str = "Error";

/// What a button does to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Clear,
    Backspace,
    Evaluate,
    Append(&'static str),
}

impl Command {
    /// Command for a keypad label; `None` for anything not on the keypad.
    pub fn from_label(label: &str) -> Option<Self> {
        let spec = keypad::find(label)?;
        Some(match spec.label {
            "C" => Command::Clear,
            BACKSPACE => Command::Backspace,
            "=" => Command::Evaluate,
            other => Command::Append(other),
        })
    }
}

/// Owns the display buffer. Appends are never validated; the whole buffer
/// is checked only when it is evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayController {
    buffer: String,
}

impl DisplayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// React to a button label or typed key. Unknown input is ignored.
    pub fn handle(&mut self, input: &str) {
        match Command::from_label(input) {
            Some(cmd) => self.apply(cmd),
            None => tracing::trace!(input = %input, "ignored unmapped input"),
        }
    }

    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Clear => self.buffer.clear(),
            Command::Backspace => {
                self.buffer.pop();
            }
            Command::Evaluate => self.evaluate(),
            Command::Append(text) => self.buffer.push_str(text),
        }
    }

    fn evaluate(&mut self) {
        self.buffer = match eval::evaluate(&self.buffer) {
            Ok(value) => {
                let shown = eval::format_number(value);
                tracing::debug!(expr = %self.buffer, result = %shown, "evaluated");
                shown
            }
            Err(err) => {
                tracing::debug!(expr = %self.buffer, error = %err, "evaluation failed");
                ERROR_TEXT.to_string()
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run(inputs: &[&str]) -> String {
        let mut display = DisplayController::new();
        for input in inputs {
            display.handle(input);
        }
        display.text().to_string()
    }

    #[test]
    fn test_starts_empty() {
        assert_eq!(DisplayController::new().text(), "");
    }

    #[test]
    fn test_evaluate_precedence() {
        assert_eq!(run(&["2", "+", "3", "*", "4", "="]), "14");
    }

    #[test]
    fn test_evaluate_errors() {
        assert_eq!(run(&["5", "/", "0", "="]), ERROR_TEXT);
        assert_eq!(run(&["="]), ERROR_TEXT);
        assert_eq!(run(&["2", "+", "="]), ERROR_TEXT);
    }

    #[test]
    fn test_result_feeds_next_expression() {
        assert_eq!(run(&["7", "/", "2", "=", "*", "2", "="]), "7");
    }

    #[test]
    fn test_error_text_is_not_an_expression() {
        assert_eq!(run(&["5", "/", "0", "=", "="]), ERROR_TEXT);
        assert_eq!(run(&["5", "/", "0", "=", "1"]), "Error1");
    }

    #[test]
    fn test_clear_on_empty() {
        assert_eq!(run(&["C"]), "");
        assert_eq!(run(&["C", "C"]), "");
    }

    #[test]
    fn test_backspace_utf8_safe() {
        let mut display = DisplayController::new();
        display.apply(Command::Append(BACKSPACE));
        display.apply(Command::Backspace);
        assert_eq!(display.text(), "");
    }

    #[test]
    fn test_unknown_input_ignored() {
        assert_eq!(run(&["1", "x", "(", "sin", "2"]), "12");
    }

    // +/- and % append their literal text rather than transforming the
    // current number. "+/-" then makes the expression malformed.
    #[test]
    fn test_sign_and_percent_append_literally() {
        assert_eq!(run(&["5", "+/-"]), "5+/-");
        assert_eq!(run(&["5", "+/-", "="]), ERROR_TEXT);
        assert_eq!(run(&["5", "0", "%"]), "50%");
        assert_eq!(run(&["7", "%", "3", "="]), "1");
    }

    #[test]
    fn test_command_from_label() {
        assert_eq!(Command::from_label("C"), Some(Command::Clear));
        assert_eq!(Command::from_label(BACKSPACE), Some(Command::Backspace));
        assert_eq!(Command::from_label("="), Some(Command::Evaluate));
        assert_eq!(Command::from_label("+/-"), Some(Command::Append("+/-")));
        assert_eq!(Command::from_label("c"), None);
    }

    fn appendable() -> impl Strategy<Value = &'static str> {
        let labels: Vec<&'static str> = keypad::BUTTONS
            .iter()
            .map(|b| b.label)
            .filter(|l| !matches!(*l, "C" | "=" | BACKSPACE))
            .collect();
        proptest::sample::select(labels)
    }

    proptest! {
        #[test]
        fn prop_appends_concatenate(labels in proptest::collection::vec(appendable(), 0..30)) {
            prop_assert_eq!(run(&labels), labels.concat());
        }

        #[test]
        fn prop_clear_always_empties(labels in proptest::collection::vec(appendable(), 0..30)) {
            let mut inputs = labels.clone();
            inputs.push("C");
            prop_assert_eq!(run(&inputs), "");
        }

        #[test]
        fn prop_backspace_removes_one_char(labels in proptest::collection::vec(appendable(), 0..30)) {
            let mut display = DisplayController::new();
            for label in &labels {
                display.handle(label);
            }
            let mut expected = display.text().to_string();
            expected.pop();
            display.handle(BACKSPACE);
            prop_assert_eq!(display.text(), expected.as_str());
        }
    }
}
