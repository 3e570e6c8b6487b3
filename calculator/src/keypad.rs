//! Keypad layout and keyboard shortcuts
//!
//! Row 0 of the grid belongs to the display; buttons occupy rows 1-5.

/// Backspace label.
pub const BACKSPACE: &str = "⌫";

/// Number of grid rows including the display row.
pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 4;

/// One keypad button: its label and grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub row: usize,
    pub col: usize,
}

const fn button(label: &'static str, row: usize, col: usize) -> ButtonSpec {
    ButtonSpec { label, row, col }
}

/// The fixed button set.
pub const BUTTONS: [ButtonSpec; 20] = [
    button("C", 1, 0),
    button(BACKSPACE, 1, 1),
    button("+/-", 1, 2),
    button("%", 1, 3),
    button("7", 2, 0),
    button("8", 2, 1),
    button("9", 2, 2),
    button("/", 2, 3),
    button("4", 3, 0),
    button("5", 3, 1),
    button("6", 3, 2),
    button("*", 3, 3),
    button("1", 4, 0),
    button("2", 4, 1),
    button("3", 4, 2),
    button("-", 4, 3),
    button("0", 5, 0),
    button(".", 5, 1),
    button("=", 5, 2),
    button("+", 5, 3),
];

impl ButtonSpec {
    pub fn tooltip(&self) -> String {
        format!("Press '{}'", self.label)
    }
}

/// Look up the button carrying `label`.
pub fn find(label: &str) -> Option<&'static ButtonSpec> {
    BUTTONS.iter().find(|b| b.label == label)
}

/// Labels triggered by one text event from the keyboard.
///
/// A text equal to a whole label fires that label; otherwise each
/// character is matched on its own and unmapped characters are dropped.
pub fn labels_for_text(text: &str) -> Vec<&'static str> {
    if let Some(spec) = find(text) {
        return vec![spec.label];
    }
    text.chars()
        .filter_map(|ch| {
            let ch = if ch == 'c' { 'C' } else { ch };
            let mut buf = [0u8; 4];
            find(ch.encode_utf8(&mut buf)).map(|b| b.label)
        })
        .collect()
}

/// Label for a non-printing key, if it has one.
pub fn label_for_key(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Backspace => Some(BACKSPACE),
        egui::Key::Enter => Some("="),
        egui::Key::Escape => Some("C"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_twenty_unique_labels() {
        let labels: HashSet<_> = BUTTONS.iter().map(|b| b.label).collect();
        assert_eq!(labels.len(), 20);
        for digit in '0'..='9' {
            assert!(labels.contains(digit.to_string().as_str()));
        }
        for op in ["+", "-", "*", "/", ".", "=", "C", BACKSPACE, "+/-", "%"] {
            assert!(labels.contains(op), "missing {op}");
        }
    }

    #[test]
    fn test_positions_unique_and_in_grid() {
        let cells: HashSet<_> = BUTTONS.iter().map(|b| (b.row, b.col)).collect();
        assert_eq!(cells.len(), BUTTONS.len());
        for b in &BUTTONS {
            assert!((1..GRID_ROWS).contains(&b.row), "{} off grid", b.label);
            assert!(b.col < GRID_COLS, "{} off grid", b.label);
        }
    }

    #[test]
    fn test_bottom_row_shares_zero() {
        for label in ["0", ".", "="] {
            assert_eq!(find(label).map(|b| b.row), Some(5));
        }
    }

    #[test]
    fn test_tooltip() {
        assert_eq!(find("7").map(|b| b.tooltip()), Some("Press '7'".to_string()));
        assert_eq!(find(BACKSPACE).map(|b| b.tooltip()), Some("Press '⌫'".to_string()));
    }

    #[test]
    fn test_labels_for_text() {
        assert_eq!(labels_for_text("7"), vec!["7"]);
        assert_eq!(labels_for_text("+/-"), vec!["+/-"]);
        assert_eq!(labels_for_text("12+"), vec!["1", "2", "+"]);
        assert_eq!(labels_for_text("c"), vec!["C"]);
        assert_eq!(labels_for_text("⌫"), vec![BACKSPACE]);
        assert!(labels_for_text("x(").is_empty());
    }

    #[test]
    fn test_label_for_key() {
        assert_eq!(label_for_key(egui::Key::Backspace), Some(BACKSPACE));
        assert_eq!(label_for_key(egui::Key::Enter), Some("="));
        assert_eq!(label_for_key(egui::Key::Escape), Some("C"));
        assert_eq!(label_for_key(egui::Key::A), None);
    }
}
