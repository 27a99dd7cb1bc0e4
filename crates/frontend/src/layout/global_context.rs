//! Open/closed state of the page-wide dropdowns.

/// Profile dropdown and status dropdowns, indexed in document order.
///
/// At most one status dropdown is open at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub profile_open: bool,
    pub open_status: Option<usize>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
    }

    pub fn close_profile(&mut self) {
        self.profile_open = false;
    }

    /// Closes every status dropdown other than `keep`.
    pub fn close_all_except(&mut self, keep: Option<usize>) {
        if self.open_status != keep {
            self.open_status = None;
        }
    }

    /// Opens `index` after closing the others, or closes it if it was open.
    pub fn toggle_status(&mut self, index: usize) {
        let was_open = self.open_status == Some(index);
        self.close_all_except(None);
        if !was_open {
            self.open_status = Some(index);
        }
    }

    pub fn is_status_open(&self, index: usize) -> bool {
        self.open_status == Some(index)
    }
}
