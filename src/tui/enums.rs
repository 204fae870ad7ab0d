//! Enumerations for TUI state management.

/// Application state for the terminal user interface.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AppState {
    Main,
    Help,
    Confirm,
}

/// Which part of the screen receives key presses.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Focus {
    Input,
    Category,
    Filter,
    List,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Input, Focus::Category, Focus::Filter, Focus::List];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// Next focus target, wrapping around.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous focus target, wrapping around.
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Input => "Input",
            Focus::Category => "Category",
            Focus::Filter => "Filter",
            Focus::List => "List",
        }
    }
}
