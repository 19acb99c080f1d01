use crate::languages::SelectionMode;

/// Open/closed state of the language overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
    mode: SelectionMode,
}

impl Dropdown {
    pub fn new(mode: SelectionMode) -> Self {
        Self { open: false, mode }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The user clicked the dropdown header.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A language was picked from the overlay.
    pub fn choose(&mut self) {
        if self.mode == SelectionMode::Single {
            self.open = false;
        }
    }

    /// Pointer press somewhere in the window. Ignored while closed.
    pub fn pointer_pressed(&mut self, inside: bool) {
        if self.open && !inside {
            log::debug!("Closing language dropdown after outside press");
            self.open = false;
        }
    }
}
