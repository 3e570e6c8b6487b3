//! Page navigation: calculator or tutorial, one at a time

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Calculator,
    Tutorial,
}

impl PageState {
    pub fn name(self) -> &'static str {
        match self {
            PageState::Calculator => "calculator",
            PageState::Tutorial => "tutorial",
        }
    }
}

/// Tracks the visible page. There is no history: the tutorial always leads
/// back to the calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    current: PageState,
}

impl Navigator {
    pub fn new(initial: PageState) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> PageState {
        self.current
    }

    pub fn switch_to(&mut self, page: PageState) {
        if self.current != page {
            tracing::info!(from = self.current.name(), to = page.name(), "switching page");
        }
        self.current = page;
    }
}

pub const TUTORIAL_TEXT: &str = "Welcome to the Calculator Tutorial!\n\n\
Use the buttons to perform calculations. Here are some tips:\n\n\
- Use numeric buttons (0-9) to input numbers.\n\
- Use operators (+, -, *, /) for basic arithmetic.\n\
- 'C' clears the display.\n\
- '⌫' removes the last digit.\n\
- '=' calculates the result.\n\
- Use keyboard shortcuts for faster input!\n\n\
Enjoy calculating!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_calculator() {
        assert_eq!(Navigator::default().current(), PageState::Calculator);
    }

    #[test]
    fn test_round_trip() {
        let mut nav = Navigator::default();
        nav.switch_to(PageState::Tutorial);
        assert_eq!(nav.current(), PageState::Tutorial);
        nav.switch_to(PageState::Calculator);
        assert_eq!(nav.current(), PageState::Calculator);
    }

    #[test]
    fn test_switch_to_current_is_noop() {
        let mut nav = Navigator::new(PageState::Tutorial);
        nav.switch_to(PageState::Tutorial);
        assert_eq!(nav.current(), PageState::Tutorial);
    }

    #[test]
    fn test_tutorial_mentions_every_control() {
        for needle in ["0-9", "+, -, *, /", "'C'", "'⌫'", "'='", "keyboard shortcuts"] {
            assert!(TUTORIAL_TEXT.contains(needle), "missing {needle}");
        }
    }
}
